use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use crate::dom::{query_all, query_one, set_style, text_of};
use crate::models::task::{Category, matches_category, matches_search};

const DELETE_PROMPT: &str = "Are you sure you want to delete this task? This action cannot be undone.";

/// Delete buttons ask for confirmation before the form is submitted.
pub fn confirm_deletes() {
    for button in query_all(".delete-btn") {
        EventListener::new_with_options(
            &button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            |event| {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message(DELETE_PROMPT).ok())
                    .unwrap_or(false);
                if !confirmed {
                    event.prevent_default();
                }
            },
        )
        .forget();
    }
}

/// Optimistic completed styling; the real toggle is the form submission.
pub fn mark_completion() {
    for button in query_all(".complete-btn") {
        let target = button.clone();
        EventListener::new(&target, "click", move |_| {
            if let Ok(Some(item)) = button.closest(".task-item") {
                let _ = item.class_list().toggle("task-completed");
            }
        })
        .forget();
    }
}

/// Resets every category badge to the colour class its text implies.
pub fn color_categories() {
    for badge in query_all(".category-badge") {
        let label = badge.text_content().unwrap_or_default();
        badge.set_class_name("category-badge");
        let _ = badge.class_list().add_1(Category::classify(&label).css_class());
    }
}

/// Live filtering of tasks by the `#task-search` box.
pub fn search_tasks() {
    let Some(input) = query_one("#task-search") else {
        return;
    };

    let target = input.clone();
    EventListener::new(&target, "input", move |_| {
        let term = input
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default();

        for item in query_all(".task-item") {
            let title = text_of(&item, ".task-title").unwrap_or_default();
            let meta = text_of(&item, ".task-meta");
            set_visible(&item, matches_search(&title, meta.as_deref(), &term));
        }
    })
    .forget();
}

/// Filtering of tasks by the `#category-filter` dropdown.
pub fn filter_by_category() {
    let Some(select) = query_one("#category-filter") else {
        return;
    };

    let target = select.clone();
    EventListener::new(&target, "change", move |_| {
        let selected = select
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
            .unwrap_or_default();

        for item in query_all(".task-item") {
            if let Some(badge) = text_of(&item, ".category-badge") {
                set_visible(&item, matches_category(&badge, &selected));
            }
        }
    })
    .forget();
}

fn set_visible(item: &Element, visible: bool) {
    let _ = set_style(item, "display", if visible { "flex" } else { "none" });
}
