use gloo::events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollLogicalPosition,
};

use super::flash::MessageKind;
use super::messages::show_message;
use crate::config::Config;
use crate::dom::{query_all, query_all_in, scroll_smoothly, set_style};
use crate::models::task::is_blank;

/// Blocks submission of forms whose required fields are empty.
pub fn validate_forms() {
    for form in query_all("form") {
        let target = form.clone();
        EventListener::new_with_options(
            &target,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if !check_required_fields(&form) {
                    event.prevent_default();
                    show_message("Please fill in all required fields.", MessageKind::Error);
                }
            },
        )
        .forget();
    }
}

/// Marks blank required fields and focuses the first; `true` if none are blank.
fn check_required_fields(form: &Element) -> bool {
    let mut first_invalid: Option<Element> = None;

    for field in query_all_in(form, "[required]") {
        if is_blank(&field_value(&field)) {
            mark_invalid(&field);
            if first_invalid.is_none() {
                first_invalid = Some(field);
            }
        } else {
            let _ = set_style(&field, "border-color", "");
            let _ = set_style(&field, "background-color", "");
        }
    }

    let Some(field) = first_invalid else {
        return true;
    };

    scroll_smoothly(&field, ScrollLogicalPosition::Center);
    if let Some(html) = field.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
    false
}

fn mark_invalid(field: &Element) {
    let _ = set_style(field, "border-color", "var(--danger-color)");
    let _ = set_style(field, "background-color", "var(--background-color)");

    if field.class_list().add_1("shake").is_ok() {
        let field = field.clone();
        Timeout::new(Config::SHAKE_MS, move || {
            let _ = field.class_list().remove_1("shake");
        })
        .forget();
    }
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        field.text_content().unwrap_or_default()
    }
}
