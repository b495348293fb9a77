use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTextAreaElement};

use crate::dom::{document, query_all, set_style};
use crate::models::task::{CounterLevel, counter_text};

/// Adds a live `length/max` counter below every textarea with a `maxlength`.
pub fn attach_counters() {
    for textarea in query_all("textarea") {
        let Some(max_length) = textarea
            .get_attribute("maxlength")
            .and_then(|value| value.trim().parse::<usize>().ok())
        else {
            continue;
        };
        let Ok(textarea) = textarea.dyn_into::<HtmlTextAreaElement>() else {
            continue;
        };
        let Some(counter) = create_counter(&textarea) else {
            continue;
        };

        update_counter(&textarea, &counter, max_length);

        let target = textarea.clone();
        EventListener::new(&target, "input", move |_| {
            update_counter(&textarea, &counter, max_length);
        })
        .forget();
    }
}

fn create_counter(textarea: &HtmlTextAreaElement) -> Option<Element> {
    let counter = document()?.create_element("div").ok()?;
    counter.set_class_name("char-counter");
    let _ = set_style(&counter, "font-size", "0.875rem");
    let _ = set_style(&counter, "text-align", "right");
    let _ = set_style(&counter, "margin-top", "0.5rem");

    textarea.parent_node()?.append_child(&counter).ok()?;
    Some(counter)
}

fn update_counter(textarea: &HtmlTextAreaElement, counter: &Element, max_length: usize) {
    // maxlength counts UTF-16 code units
    let length = textarea.value().encode_utf16().count();

    counter.set_text_content(Some(&counter_text(length, max_length)));
    let _ = set_style(
        counter,
        "color",
        CounterLevel::for_length(length, max_length).color(),
    );
}
