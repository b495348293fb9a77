use crate::services::retry::RetryPolicy;
use log::Level;

/// Configuration constants for the page enhancements
pub struct Config;

impl Config {
    /// Most verbose level forwarded to the browser console
    pub const LOG_LEVEL: Level = Level::Info;

    /// localStorage key holding the explicit theme choice
    pub const THEME_STORAGE_KEY: &'static str = "theme";

    /// Attribute on `<html>` consumed by the stylesheet
    pub const THEME_ATTRIBUTE: &'static str = "data-theme";

    /// Selector for theme toggle controls rendered by the server
    pub const THEME_TOGGLE_SELECTOR: &'static str = ".theme-toggle";

    /// Media query reporting the system colour scheme
    pub const DARK_SCHEME_QUERY: &'static str = "(prefers-color-scheme: dark)";

    /// Toggle control lookups before giving up (first one is immediate)
    pub const TOGGLE_LOOKUP_ATTEMPTS: u32 = 10;

    /// Delay between toggle control lookups
    pub const TOGGLE_LOOKUP_INTERVAL_MS: u32 = 100;

    /// Duration of the scale-down pulse on toggle
    pub const TOGGLE_PULSE_MS: u32 = 150;

    /// Duration of the shake animation on invalid fields
    pub const SHAKE_MS: u32 = 500;

    /// Flash messages stay visible this long before fading
    pub const MESSAGE_DISMISS_MS: u32 = 5_000;

    /// Fade-out transition length before a message is removed
    pub const MESSAGE_FADE_MS: u32 = 300;

    /// Progress bars restart their width transition after this delay
    pub const PROGRESS_RESTART_MS: u32 = 100;

    /// Welcome banner timings: fade in, fade out, removal after fade out
    pub const WELCOME_SHOW_MS: u32 = 500;
    pub const WELCOME_HIDE_MS: u32 = 4_500;
    pub const WELCOME_REMOVE_MS: u32 = 1_000;

    /// Counters turn to the warning colour past this share of `maxlength`
    pub const COUNTER_WARNING_RATIO: f64 = 0.9;

    /// Cookie carrying the CSRF token and the header it is echoed in
    pub const CSRF_COOKIE: &'static str = "csrftoken";
    pub const CSRF_HEADER: &'static str = "X-CSRFToken";
}

/// Runtime configuration for the theme controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    storage_key: String,
    toggle_selector: String,
    retry: RetryPolicy,
    pulse_ms: u32,
}

impl ThemeConfig {
    pub fn builder() -> ThemeConfigBuilder {
        ThemeConfigBuilder::default()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn toggle_selector(&self) -> &str {
        &self.toggle_selector
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    pub fn pulse_ms(&self) -> u32 {
        self.pulse_ms
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`ThemeConfig`]; unset fields fall back to [`Config`].
#[derive(Debug, Default)]
pub struct ThemeConfigBuilder {
    storage_key: Option<String>,
    toggle_selector: Option<String>,
    retry: Option<RetryPolicy>,
    pulse_ms: Option<u32>,
}

impl ThemeConfigBuilder {
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    pub fn toggle_selector(mut self, selector: impl Into<String>) -> Self {
        self.toggle_selector = Some(selector.into());
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn pulse_ms(mut self, pulse_ms: u32) -> Self {
        self.pulse_ms = Some(pulse_ms);
        self
    }

    pub fn build(self) -> ThemeConfig {
        ThemeConfig {
            storage_key: self
                .storage_key
                .unwrap_or_else(|| Config::THEME_STORAGE_KEY.to_string()),
            toggle_selector: self
                .toggle_selector
                .unwrap_or_else(|| Config::THEME_TOGGLE_SELECTOR.to_string()),
            retry: self.retry.unwrap_or_default(),
            pulse_ms: self.pulse_ms.unwrap_or(Config::TOGGLE_PULSE_MS),
        }
    }
}
