use gloo_timers::callback::Timeout;

use crate::config::Config;
use crate::dom::{inline_style, query_all, set_style};

/// Replays the width transition of every progress bar on page load.
pub fn animate_progress_bars() {
    for bar in query_all(".progress-bar") {
        let width = match inline_style(&bar, "width") {
            width if !width.is_empty() => width,
            _ => bar.get_attribute("data-width").unwrap_or_default(),
        };
        if width.is_empty() {
            continue;
        }

        let _ = set_style(&bar, "width", "0");
        Timeout::new(Config::PROGRESS_RESTART_MS, move || {
            let _ = set_style(&bar, "width", &width);
        })
        .forget();
    }
}
