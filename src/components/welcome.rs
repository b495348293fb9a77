use gloo_timers::callback::Timeout;

use crate::config::Config;
use crate::dom::{detach, document};

/// Fades the welcome banner in, then out, then removes it.
pub fn animate_welcome() {
    let Some(welcome) = document().and_then(|doc| doc.get_element_by_id("welcome-message"))
    else {
        return;
    };

    {
        let welcome = welcome.clone();
        Timeout::new(Config::WELCOME_SHOW_MS, move || {
            let _ = welcome.class_list().add_1("show");
        })
        .forget();
    }

    Timeout::new(Config::WELCOME_HIDE_MS, move || {
        let _ = welcome.class_list().remove_1("show");
        Timeout::new(Config::WELCOME_REMOVE_MS, move || detach(&welcome)).forget();
    })
    .forget();
}
