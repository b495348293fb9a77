//! Thin `web-sys` helpers shared by the page behaviours.

pub mod theme;
pub mod theme_view;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::models::error::AppError;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Every element in `list`, skipping non-element nodes.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`.
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// All descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub fn query_one(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Sets an inline style property; an empty value removes it.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), AppError> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| AppError::DomError(format!("<{}> has no style", element.tag_name())))?;
    let style = html.style();

    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    result.map_err(|e| AppError::DomError(format!("style {property}: {e:?}")))
}

pub fn inline_style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(property).ok())
        .unwrap_or_default()
}

/// Text content of the first descendant matching `selector`.
pub fn text_of(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
}

/// Removes `element` if it is still attached.
pub fn detach(element: &Element) {
    if element.parent_element().is_some() {
        element.remove();
    }
}

/// Smoothly scrolls `element` into view with the given vertical alignment.
pub fn scroll_smoothly(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
