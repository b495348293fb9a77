use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::{AppHandle, Callback};

use super::flash::{Flash, FlashProps, MessageKind};
use crate::config::Config;
use crate::dom::{detach, document, query_all, query_one, set_style};

/// The one client-side flash on the page, keyed by its host element.
#[derive(Debug)]
pub struct FlashSlot<K, H> {
    current: Option<(K, H)>,
}

impl<K: PartialEq, H> FlashSlot<K, H> {
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Stores a new flash and hands back the one it replaces.
    pub fn install(&mut self, key: K, handle: H) -> Option<(K, H)> {
        self.current.replace((key, handle))
    }

    pub fn take(&mut self) -> Option<(K, H)> {
        self.current.take()
    }

    /// Removes the flash only if `key` still names it; a dismissal that
    /// arrives after a replacement leaves the newer flash alone.
    pub fn release(&mut self, key: &K) -> Option<(K, H)> {
        match &self.current {
            Some((current, _)) if current == key => self.current.take(),
            _ => None,
        }
    }
}

impl<K: PartialEq, H> Default for FlashSlot<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static ACTIVE_FLASH: RefCell<FlashSlot<Element, AppHandle<Flash>>> =
        const { RefCell::new(FlashSlot::new()) };
}

fn unmount((host, handle): (Element, AppHandle<Flash>)) {
    handle.destroy();
    detach(&host);
}

fn release_flash(host: &Element) {
    if let Some(flash) = ACTIVE_FLASH.with(|slot| slot.borrow_mut().release(host)) {
        unmount(flash);
    }
}

/// Shows a client-side message at the top of the main container,
/// replacing any message shown this way before.
pub fn show_message(text: &str, kind: MessageKind) {
    if let Some(previous) = ACTIVE_FLASH.with(|slot| slot.borrow_mut().take()) {
        unmount(previous);
    }
    for host in query_all(".custom-message") {
        detach(&host);
    }

    let Some(container) = query_one("main .container") else {
        log::debug!("No message container, dropping message: {text}");
        return;
    };
    let Some(host) = document().and_then(|doc| doc.create_element("div").ok()) else {
        return;
    };
    host.set_class_name("custom-message");

    if let Err(e) = container.insert_before(&host, container.first_child().as_ref()) {
        log::warn!("Failed to insert message: {e:?}");
        return;
    }

    // Unmounting from inside the component's own timer would drop it mid-call,
    // so the teardown runs on the next tick.
    let on_dismissed = {
        let host = host.clone();
        Callback::from(move |()| {
            let host = host.clone();
            Timeout::new(0, move || release_flash(&host)).forget();
        })
    };

    let handle = yew::Renderer::<Flash>::with_root_and_props(
        host.clone(),
        FlashProps {
            text: text.to_string().into(),
            kind,
            on_dismissed,
        },
    )
    .render();
    if let Some(stale) = ACTIVE_FLASH.with(|slot| slot.borrow_mut().install(host, handle)) {
        unmount(stale);
    }
}

/// Fades out and removes the server-rendered messages after a delay.
pub fn auto_dismiss_messages() {
    for message in query_all(".message") {
        schedule_dismiss(message);
    }
}

fn schedule_dismiss(message: Element) {
    Timeout::new(Config::MESSAGE_DISMISS_MS, move || {
        let _ = set_style(&message, "opacity", "0");
        let _ = set_style(&message, "transform", "translateY(-10px)");
        Timeout::new(Config::MESSAGE_FADE_MS, move || detach(&message)).forget();
    })
    .forget();
}
