use crate::dom::document;

const ANIMATIONS: &str = include_str!("../style.css");

/// Adds the stylesheet for the animations driven from Rust.
pub fn inject_styles() {
    let Some(document) = document() else {
        return;
    };
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };

    style.set_text_content(Some(ANIMATIONS));
    if let Err(e) = head.append_child(&style) {
        log::warn!("Failed to inject styles: {e:?}");
    }
}
