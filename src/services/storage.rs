use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::config::Config;
use crate::controllers::theme::ThemeStore;
use crate::models::{error::AppError, theme::Theme};

/// Theme preference in `localStorage`, system signal from `matchMedia`.
pub struct BrowserThemeStore {
    key: String,
}

impl BrowserThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for BrowserThemeStore {
    fn default() -> Self {
        Self::new(Config::THEME_STORAGE_KEY)
    }
}

impl ThemeStore for BrowserThemeStore {
    type Subscription = EventListener;

    fn persisted(&self) -> Option<Theme> {
        theme_from_storage(read_raw(&self.key))
    }

    fn persist(&self, theme: Theme) {
        if let Err(e) = write_raw(&self.key, theme.as_str()) {
            log::warn!("Failed to save theme: {e}");
        }
    }

    fn system_prefers_dark(&self) -> bool {
        dark_scheme_query().is_some_and(|mq| mq.matches())
    }

    fn subscribe_system(&self, callback: Box<dyn Fn(bool)>) -> Option<EventListener> {
        let mq = dark_scheme_query()?;
        let fallback = mq.clone();

        Some(EventListener::new(&mq, "change", move |event| {
            let matches = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| fallback.matches(), MediaQueryListEvent::matches);
            callback(matches);
        }))
    }
}

/// Interprets a localStorage read; anything but a valid theme counts as no choice.
pub fn theme_from_storage(read: Result<Option<String>, AppError>) -> Option<Theme> {
    match read {
        Ok(Some(value)) => match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("Ignoring stored theme: {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("localStorage unavailable, following system theme: {e}");
            None
        }
    }
}

fn local_storage() -> Result<web_sys::Storage, AppError> {
    web_sys::window()
        .ok_or_else(|| AppError::StorageError("no window".to_string()))?
        .local_storage()
        .map_err(|e| AppError::StorageError(format!("{e:?}")))?
        .ok_or_else(|| AppError::StorageError("localStorage disabled".to_string()))
}

fn read_raw(key: &str) -> Result<Option<String>, AppError> {
    local_storage()?
        .get_item(key)
        .map_err(|e| AppError::StorageError(format!("read failed: {e:?}")))
}

fn write_raw(key: &str, value: &str) -> Result<(), AppError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| AppError::StorageError(format!("write failed: {e:?}")))
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    web_sys::window()?
        .match_media(Config::DARK_SCHEME_QUERY)
        .ok()
        .flatten()
}
