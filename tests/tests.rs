#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::future::Future;
    use std::pin::pin;
    use std::rc::Rc;
    use std::task::{Context, Poll, Waker};

    use todo_enhance::controllers::theme::{
        DispatchGuard, ThemeController, ThemeStore, ThemeView,
    };
    use todo_enhance::models::{error::AppError, theme::Theme};
    use todo_enhance::services::retry::{RetryPolicy, retry_at_interval};
    use todo_enhance::services::storage::theme_from_storage;

    // In-memory stand-in for localStorage + matchMedia
    #[derive(Default)]
    struct MemoryStore {
        raw: RefCell<Option<String>>,
        prefers_dark: Cell<bool>,
        listener: RefCell<Option<Box<dyn Fn(bool)>>>,
    }

    impl MemoryStore {
        fn with(raw: Option<&str>, prefers_dark: bool) -> Self {
            Self {
                raw: RefCell::new(raw.map(str::to_string)),
                prefers_dark: Cell::new(prefers_dark),
                listener: RefCell::new(None),
            }
        }

        fn raw(&self) -> Option<String> {
            self.raw.borrow().clone()
        }

        fn change_system(&self, prefers_dark: bool) {
            self.prefers_dark.set(prefers_dark);
            if let Some(listener) = self.listener.borrow().as_ref() {
                listener(prefers_dark);
            }
        }
    }

    impl ThemeStore for MemoryStore {
        type Subscription = ();

        fn persisted(&self) -> Option<Theme> {
            theme_from_storage(Ok(self.raw()))
        }

        fn persist(&self, theme: Theme) {
            *self.raw.borrow_mut() = Some(theme.as_str().to_string());
        }

        fn system_prefers_dark(&self) -> bool {
            self.prefers_dark.get()
        }

        fn subscribe_system(&self, callback: Box<dyn Fn(bool)>) -> Option<()> {
            *self.listener.borrow_mut() = Some(callback);
            Some(())
        }
    }

    // In-memory stand-in for <html data-theme> and the toggle controls
    #[derive(Default)]
    struct MemoryView {
        attribute: RefCell<Option<String>>,
        toggle_present: Cell<bool>,
        icon: RefCell<Option<String>>,
        label: RefCell<Option<String>>,
        pulses: Cell<u32>,
    }

    impl MemoryView {
        fn with_toggle() -> Self {
            let view = Self::default();
            view.toggle_present.set(true);
            view
        }

        fn attribute(&self) -> Option<String> {
            self.attribute.borrow().clone()
        }

        fn icon(&self) -> Option<String> {
            self.icon.borrow().clone()
        }

        fn insert_toggle(&self) {
            self.toggle_present.set(true);
        }
    }

    impl ThemeView for MemoryView {
        fn applied(&self) -> Option<String> {
            self.attribute()
        }

        fn apply(&self, theme: Theme) {
            *self.attribute.borrow_mut() = Some(theme.as_str().to_string());
        }

        fn has_toggle(&self) -> bool {
            self.toggle_present.get()
        }

        fn set_toggle_icon(&self, icon: &str, label: &str) -> bool {
            if !self.toggle_present.get() {
                return false;
            }
            *self.icon.borrow_mut() = Some(icon.to_string());
            *self.label.borrow_mut() = Some(label.to_string());
            true
        }

        fn pulse_toggle(&self) {
            if self.toggle_present.get() {
                self.pulses.set(self.pulses.get() + 1);
            }
        }
    }

    type TestController = ThemeController<MemoryStore, MemoryView>;

    fn controller(
        stored: Option<&str>,
        prefers_dark: bool,
        view: MemoryView,
    ) -> Rc<TestController> {
        ThemeController::new(MemoryStore::with(stored, prefers_dark), view)
    }

    /// Stand-in for a DOM click event, compared by identity.
    #[derive(Debug, Clone, PartialEq)]
    struct Click {
        id: u32,
        time_stamp: f64,
    }

    /// What the delegated click listener does with each dispatch.
    fn dispatch(
        controller: &TestController,
        guard: &DispatchGuard<Click>,
        click: &Click,
    ) -> Option<Theme> {
        guard.admit(click).then(|| controller.toggle())
    }

    fn assert_icon_matches_attribute(controller: &TestController) {
        let applied = Theme::from_attribute(controller.view().attribute().as_deref());
        assert_eq!(controller.view().icon().as_deref(), Some(applied.icon()));
    }

    fn block_on<F: Future>(future: F) -> F::Output {
        let mut cx = Context::from_waker(Waker::noop());
        let mut future = pin!(future);
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(output) => output,
            Poll::Pending => panic!("future should complete with immediate sleeps"),
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_storage_display() {
        let error = AppError::StorageError("localStorage disabled".to_string());
        assert_eq!(error.to_string(), "Storage error: localStorage disabled");
    }

    #[test]
    fn test_invalid_theme_is_data_error() {
        let error = "blue".parse::<Theme>().unwrap_err();
        assert_eq!(error.to_string(), "Data error: Invalid theme: blue");
    }

    // ===== Theme Model Tests =====

    #[test]
    fn test_toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_controller_toggle_twice_restores_theme() {
        for start in [Theme::Light, Theme::Dark] {
            let controller = controller(Some(start.as_str()), false, MemoryView::with_toggle());
            controller.initialize();

            assert_eq!(controller.toggle(), start.toggled());
            assert_eq!(controller.toggle(), start);
            assert_eq!(controller.view().attribute().as_deref(), Some(start.as_str()));
        }
    }

    // ===== Resolution Tests =====

    #[test]
    fn test_no_preference_follows_dark_system() {
        // Scenario A
        let controller = controller(None, true, MemoryView::with_toggle());
        assert_eq!(controller.initialize(), Theme::Dark);

        assert_eq!(controller.view().attribute().as_deref(), Some("dark"));
        assert_eq!(controller.view().icon().as_deref(), Some(Theme::Dark.icon()));
    }

    #[test]
    fn test_no_preference_light_system_is_light() {
        let controller = controller(None, false, MemoryView::with_toggle());
        assert_eq!(controller.initialize(), Theme::Light);
        assert_eq!(controller.view().attribute().as_deref(), Some("light"));
    }

    #[test]
    fn test_stored_preference_beats_system() {
        // Scenario B
        let controller = controller(Some("light"), true, MemoryView::with_toggle());
        assert_eq!(controller.initialize(), Theme::Light);
        assert_eq!(controller.view().attribute().as_deref(), Some("light"));

        let controller = self::controller(Some("dark"), false, MemoryView::default());
        assert_eq!(controller.initialize(), Theme::Dark);
    }

    #[test]
    fn test_unparseable_preference_is_treated_as_absent() {
        let controller = controller(Some("solarized"), true, MemoryView::default());
        assert_eq!(controller.initialize(), Theme::Dark);
        assert_eq!(controller.view().attribute().as_deref(), Some("dark"));
    }

    #[test]
    fn test_initialize_never_writes_preference() {
        let controller = controller(None, true, MemoryView::with_toggle());
        controller.initialize();
        assert_eq!(controller.store().raw(), None);
    }

    // ===== Toggle Tests =====

    #[test]
    fn test_click_toggle_from_light() {
        // Scenario C
        let controller = controller(Some("light"), false, MemoryView::with_toggle());
        controller.initialize();

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.view().attribute().as_deref(), Some("dark"));
        assert_eq!(controller.store().raw().as_deref(), Some("dark"));
        assert_eq!(controller.view().icon().as_deref(), Some(Theme::Dark.icon()));
        assert_eq!(controller.view().pulses.get(), 1);
    }

    #[test]
    fn test_toggle_writes_through_to_storage() {
        let controller = controller(None, true, MemoryView::with_toggle());
        controller.initialize();

        for _ in 0..3 {
            let theme = controller.toggle();
            assert_eq!(controller.store().persisted(), Some(theme));
            assert_eq!(controller.applied_theme(), theme);
        }
    }

    #[test]
    fn test_toggle_with_unset_attribute_goes_dark() {
        let controller = controller(None, false, MemoryView::default());
        assert_eq!(controller.view().attribute(), None);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.view().attribute().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_without_control_is_not_an_error() {
        let controller = controller(Some("dark"), false, MemoryView::default());
        controller.initialize();

        assert_eq!(controller.toggle(), Theme::Light);
        assert!(!controller.update_icon());
        assert_eq!(controller.view().icon(), None);
        assert_eq!(controller.view().pulses.get(), 0);
    }

    #[test]
    fn test_duplicate_dispatch_toggles_once() {
        let controller = controller(Some("light"), false, MemoryView::with_toggle());
        controller.initialize();

        let guard = DispatchGuard::default();
        let click = Click { id: 1, time_stamp: 42.5 };

        assert_eq!(dispatch(&controller, &guard, &click), Some(Theme::Dark));
        assert_eq!(dispatch(&controller, &guard, &click), None);
        assert_eq!(controller.view().attribute().as_deref(), Some("dark"));
        assert_eq!(controller.store().raw().as_deref(), Some("dark"));
    }

    #[test]
    fn test_clicks_with_equal_time_stamps_both_toggle() {
        let controller = controller(Some("light"), false, MemoryView::with_toggle());
        controller.initialize();

        let guard = DispatchGuard::default();
        let first = Click { id: 1, time_stamp: 100.0 };
        let second = Click { id: 2, time_stamp: 100.0 };

        assert_eq!(dispatch(&controller, &guard, &first), Some(Theme::Dark));
        assert_eq!(dispatch(&controller, &guard, &second), Some(Theme::Light));
        assert_eq!(controller.view().pulses.get(), 2);
    }

    // ===== Late Toggle Control Tests =====

    #[test]
    fn test_late_control_click_still_toggles() {
        // Scenario D
        let controller = controller(None, false, MemoryView::default());
        controller.initialize();
        assert_eq!(controller.view().icon(), None);

        controller.view().insert_toggle();
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.view().icon().as_deref(), Some(Theme::Dark.icon()));
    }

    #[test]
    fn test_lookup_binds_when_control_appears() {
        let controller = controller(Some("dark"), false, MemoryView::default());
        controller.initialize();

        let found = block_on(retry_at_interval(
            RetryPolicy::new(5, 100),
            |attempt| {
                if attempt == 3 {
                    controller.view().insert_toggle();
                }
                controller.bind_toggle_control(attempt)
            },
            |_| std::future::ready(()),
        ));

        assert_eq!(found, Some(3));
        assert_eq!(controller.view().icon().as_deref(), Some(Theme::Dark.icon()));
        assert_eq!(
            controller.view().label.borrow().as_deref(),
            Some("Switch to light mode")
        );
    }

    #[test]
    fn test_lookup_gives_up_without_control() {
        let controller = controller(None, false, MemoryView::default());
        controller.initialize();
        let mut lookups = 0;

        let found = block_on(retry_at_interval(
            RetryPolicy::new(3, 100),
            |attempt| {
                lookups += 1;
                controller.bind_toggle_control(attempt)
            },
            |_| std::future::ready(()),
        ));

        assert_eq!(found, None);
        assert_eq!(lookups, 3);
    }

    // ===== System Signal Tests =====

    #[test]
    fn test_system_change_followed_without_preference() {
        let controller = controller(None, false, MemoryView::with_toggle());
        controller.initialize();
        assert!(controller.is_watching_system());

        controller.store().change_system(true);
        assert_eq!(controller.view().attribute().as_deref(), Some("dark"));
        assert_icon_matches_attribute(&controller);

        controller.store().change_system(false);
        assert_eq!(controller.view().attribute().as_deref(), Some("light"));
        assert_icon_matches_attribute(&controller);
    }

    #[test]
    fn test_system_change_ignored_with_preference() {
        // Scenario E
        let controller = controller(Some("light"), false, MemoryView::with_toggle());
        controller.initialize();

        controller.store().change_system(true);
        assert_eq!(controller.view().attribute().as_deref(), Some("light"));
        assert_eq!(controller.store().raw().as_deref(), Some("light"));
    }

    #[test]
    fn test_system_change_ignored_after_toggle() {
        let controller = controller(None, false, MemoryView::with_toggle());
        controller.initialize();
        controller.toggle();

        for prefers_dark in [false, true, false] {
            controller.store().change_system(prefers_dark);
            assert_eq!(controller.view().attribute().as_deref(), Some("dark"));
        }
    }

    // ===== Icon Consistency Tests =====

    #[test]
    fn test_icon_tracks_attribute_through_every_operation() {
        let controller = controller(None, true, MemoryView::with_toggle());

        controller.initialize();
        assert_icon_matches_attribute(&controller);

        controller.toggle();
        assert_icon_matches_attribute(&controller);

        controller.store().change_system(false);
        assert_icon_matches_attribute(&controller);

        controller.toggle();
        assert_icon_matches_attribute(&controller);
    }

    #[test]
    fn test_status_snapshot() {
        let controller = controller(None, true, MemoryView::default());
        controller.initialize();

        let status = controller.status();
        assert_eq!(status.applied.as_deref(), Some("dark"));
        assert_eq!(status.persisted, None);
        assert!(status.system_prefers_dark);
        assert!(!status.toggle_present);
    }
}
