//! Progressive enhancement for the server-rendered to-do pages.
//!
//! The crate attaches behaviour to markup it does not own: the light/dark
//! theme controller, plus form validation, task filtering and a handful of
//! cosmetic animations.

use std::rc::Rc;

pub mod components;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod models;
pub mod services;

use components::{anchors, char_counter, forms, messages, progress, style, task_list, welcome};
use config::ThemeConfig;
use dom::theme::BrowserThemeController;

/// Whether `document.readyState` means the DOM is still being parsed.
pub fn is_still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Attaches every page behaviour. Call once, after the DOM is parsed.
pub fn enhance_page(config: &ThemeConfig) -> Rc<BrowserThemeController> {
    log::info!("To-do page enhancements loading");

    style::inject_styles();
    let theme = dom::theme::initialize_theme(config);

    task_list::mark_completion();
    task_list::confirm_deletes();
    forms::validate_forms();
    messages::auto_dismiss_messages();
    task_list::color_categories();
    task_list::search_tasks();
    task_list::filter_by_category();
    progress::animate_progress_bars();
    char_counter::attach_counters();
    anchors::smooth_scroll_anchors();
    welcome::animate_welcome();

    log::info!("All page enhancements initialized");
    theme
}
