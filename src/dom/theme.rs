use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};
use web_sys::js_sys::Reflect;

use super::document;
use super::theme_view::DomThemeView;
use crate::config::ThemeConfig;
use crate::controllers::theme::{DispatchGuard, ThemeController};
use crate::services::retry::retry_with_timer;
use crate::services::storage::BrowserThemeStore;

pub type BrowserThemeController = ThemeController<BrowserThemeStore, DomThemeView>;

/// Applies the effective theme and wires toggling for the page lifetime.
///
/// Toggling goes through a single delegated click listener on the
/// document, so controls inserted after this call work without rebinding.
/// The bounded lookup only exists to refresh the icon of a late control.
pub fn initialize_theme(config: &ThemeConfig) -> Rc<BrowserThemeController> {
    let controller = ThemeController::new(
        BrowserThemeStore::new(config.storage_key()),
        DomThemeView::new(config),
    );
    controller.initialize();

    listen_for_toggle_clicks(&controller);
    spawn_toggle_lookup(&controller, config);
    expose_debug_hook(&controller);

    controller
}

fn listen_for_toggle_clicks(controller: &Rc<BrowserThemeController>) {
    let Some(document) = document() else {
        log::warn!("No document, theme toggle disabled");
        return;
    };

    let controller = Rc::clone(controller);
    let guard = DispatchGuard::<Event>::default();
    EventListener::new(&document, "click", move |event| {
        let on_toggle = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(controller.view().selector()).ok().flatten())
            .is_some();

        if on_toggle && guard.admit(event) {
            controller.toggle();
        }
    })
    .forget();
}

fn spawn_toggle_lookup(controller: &Rc<BrowserThemeController>, config: &ThemeConfig) {
    let controller = Rc::clone(controller);
    let policy = config.retry();

    spawn_local(async move {
        let found =
            retry_with_timer(policy, |attempt| controller.bind_toggle_control(attempt)).await;
        if found.is_none() {
            log::info!("Theme toggle not found after {} attempts", policy.attempts());
        }
    });
}

/// `window.debugTheme()` prints the controller's view of the world.
fn expose_debug_hook(controller: &Rc<BrowserThemeController>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let controller = Rc::clone(controller);
    let hook = Closure::<dyn Fn()>::new(move || {
        let status = controller.status();
        gloo::console::log!(format!("{status:#?}"));
    });

    if let Err(e) = Reflect::set(&window, &JsValue::from_str("debugTheme"), hook.as_ref()) {
        log::warn!("Failed to expose debugTheme: {e:?}");
    }
    hook.forget();
}
