use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::models::theme::Theme;

/// Persisted preference and system colour-scheme signal.
pub trait ThemeStore {
    /// Keeps a system-signal subscription alive until dropped.
    type Subscription;

    /// Explicit user choice, if one was ever made.
    fn persisted(&self) -> Option<Theme>;

    fn persist(&self, theme: Theme);

    fn system_prefers_dark(&self) -> bool;

    /// Calls `callback` with the new "prefers dark" value on every change.
    fn subscribe_system(&self, callback: Box<dyn Fn(bool)>) -> Option<Self::Subscription>;
}

/// Document attribute and toggle controls.
pub trait ThemeView {
    /// Raw `data-theme` value currently on the document.
    fn applied(&self) -> Option<String>;

    fn apply(&self, theme: Theme);

    fn has_toggle(&self) -> bool;

    /// Writes the glyph into every toggle control; `false` when none exist.
    fn set_toggle_icon(&self, icon: &str, label: &str) -> bool;

    /// Brief scale pulse on the toggle control, if present.
    fn pulse_toggle(&self);
}

/// Admits at most one toggle per dispatched event.
///
/// Events are compared by identity, so every listener that receives the
/// same dispatch sees the same `K` and only the first one is admitted.
#[derive(Debug)]
pub struct DispatchGuard<K> {
    last: RefCell<Option<K>>,
}

impl<K> Default for DispatchGuard<K> {
    fn default() -> Self {
        Self {
            last: RefCell::new(None),
        }
    }
}

impl<K: PartialEq + Clone> DispatchGuard<K> {
    pub fn admit(&self, event: &K) -> bool {
        let mut last = self.last.borrow_mut();
        if last.as_ref() == Some(event) {
            return false;
        }
        *last = Some(event.clone());
        true
    }
}

/// Snapshot printed by `debugTheme`
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStatus {
    pub applied: Option<String>,
    pub persisted: Option<Theme>,
    pub system_prefers_dark: bool,
    pub toggle_present: bool,
}

pub struct ThemeController<S: ThemeStore, V: ThemeView> {
    store: S,
    view: V,
    subscription: RefCell<Option<S::Subscription>>,
}

impl<S, V> ThemeController<S, V>
where
    S: ThemeStore + 'static,
    V: ThemeView + 'static,
{
    pub fn new(store: S, view: V) -> Rc<Self> {
        Rc::new(Self {
            store,
            view,
            subscription: RefCell::new(None),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Applies the effective theme and starts following the system signal.
    pub fn initialize(self: &Rc<Self>) -> Theme {
        log::info!("Initializing theme system");
        let theme = self.apply_stored_theme();
        self.watch_system();
        theme
    }

    /// Persisted preference, else the system signal.
    pub fn resolve(&self) -> Theme {
        match self.store.persisted() {
            Some(theme) => {
                log::info!("Using saved theme: {theme}");
                theme
            }
            None => {
                let theme = Theme::from_system(self.store.system_prefers_dark());
                log::info!("Using system theme preference: {theme}");
                theme
            }
        }
    }

    pub fn apply_stored_theme(&self) -> Theme {
        let theme = self.resolve();
        self.view.apply(theme);
        self.update_icon();
        theme
    }

    /// Theme currently on the document, read leniently.
    pub fn applied_theme(&self) -> Theme {
        Theme::from_attribute(self.view.applied().as_deref())
    }

    /// Flips the applied theme and records it as the explicit preference.
    pub fn toggle(&self) -> Theme {
        let current = self.view.applied();
        let next = Theme::from_attribute(current.as_deref()).toggled();

        log::info!(
            "Switching theme from {} to {next}",
            current.as_deref().unwrap_or("<unset>")
        );

        self.view.apply(next);
        self.store.persist(next);
        self.update_icon();
        self.view.pulse_toggle();
        next
    }

    /// Syncs the toggle glyph with the document attribute.
    pub fn update_icon(&self) -> bool {
        let theme = self.applied_theme();
        let updated = self.view.set_toggle_icon(theme.icon(), theme.label());
        if !updated {
            log::debug!("Theme toggle not found for icon update");
        }
        updated
    }

    /// One toggle-control lookup; refreshes the icon when the control exists.
    pub fn bind_toggle_control(&self, attempt: u32) -> bool {
        if self.view.has_toggle() {
            log::info!("Theme toggle found on attempt {attempt}");
            self.update_icon();
            true
        } else {
            false
        }
    }

    /// Follows the system signal only while no explicit choice is persisted.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        if self.store.persisted().is_some() {
            return None;
        }

        let theme = Theme::from_system(prefers_dark);
        self.view.apply(theme);
        self.update_icon();
        Some(theme)
    }

    pub fn watch_system(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let subscription = self.store.subscribe_system(Box::new(move |prefers_dark| {
            if let Some(controller) = weak.upgrade() {
                controller.on_system_change(prefers_dark);
            }
        }));
        *self.subscription.borrow_mut() = subscription;
    }

    pub fn is_watching_system(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    pub fn status(&self) -> ThemeStatus {
        ThemeStatus {
            applied: self.view.applied(),
            persisted: self.store.persisted(),
            system_prefers_dark: self.store.system_prefers_dark(),
            toggle_present: self.view.has_toggle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Click {
        id: u32,
    }

    #[test]
    fn test_dispatch_guard_rejects_same_event() {
        let guard = DispatchGuard::default();
        let click = Click { id: 1 };
        assert!(guard.admit(&click));
        assert!(!guard.admit(&click));
        assert!(!guard.admit(&click.clone()));
    }

    #[test]
    fn test_dispatch_guard_admits_each_new_event() {
        let guard = DispatchGuard::default();
        assert!(guard.admit(&Click { id: 1 }));
        assert!(guard.admit(&Click { id: 2 }));
        assert!(guard.admit(&Click { id: 1 }));
    }
}
