use gloo::events::{EventListener, EventListenerOptions};
use web_sys::ScrollLogicalPosition;

use crate::dom::{query_all, query_one, scroll_smoothly};

/// In-page links scroll smoothly instead of jumping.
pub fn smooth_scroll_anchors() {
    for anchor in query_all("a[href^=\"#\"]") {
        let target = anchor.clone();
        EventListener::new_with_options(
            &target,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let destination = anchor
                    .get_attribute("href")
                    .and_then(|href| query_one(&href));
                if let Some(destination) = destination {
                    scroll_smoothly(&destination, ScrollLogicalPosition::Start);
                }
            },
        )
        .forget();
    }
}
