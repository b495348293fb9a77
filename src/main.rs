use gloo::events::EventListener;

use todo_enhance::config::{Config, ThemeConfig};
use todo_enhance::{dom, enhance_page, is_still_loading};

fn main() {
    if let Err(e) = console_log::init_with_level(Config::LOG_LEVEL) {
        gloo::console::warn!(format!("Console logging unavailable: {e}"));
    }

    let Some(document) = dom::document() else {
        log::warn!("No document, page enhancements skipped");
        return;
    };

    if is_still_loading(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", |_| {
            enhance_page(&ThemeConfig::default());
        })
        .forget();
    } else {
        enhance_page(&ThemeConfig::default());
    }
}
