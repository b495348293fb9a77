use gloo_timers::callback::Timeout;

use super::{document, query_all, set_style};
use crate::config::{Config, ThemeConfig};
use crate::controllers::theme::ThemeView;
use crate::models::theme::Theme;

/// `data-theme` on `<html>` plus the `.theme-toggle` controls.
pub struct DomThemeView {
    selector: String,
    pulse_ms: u32,
}

impl DomThemeView {
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            selector: config.toggle_selector().to_string(),
            pulse_ms: config.pulse_ms(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl ThemeView for DomThemeView {
    fn applied(&self) -> Option<String> {
        document()?
            .document_element()?
            .get_attribute(Config::THEME_ATTRIBUTE)
    }

    fn apply(&self, theme: Theme) {
        let Some(root) = document().and_then(|doc| doc.document_element()) else {
            return;
        };
        if let Err(e) = root.set_attribute(Config::THEME_ATTRIBUTE, theme.as_str()) {
            log::warn!("Failed to apply theme: {e:?}");
        }
    }

    fn has_toggle(&self) -> bool {
        super::query_one(&self.selector).is_some()
    }

    fn set_toggle_icon(&self, icon: &str, label: &str) -> bool {
        let controls = query_all(&self.selector);

        for control in &controls {
            control.set_text_content(Some(icon));
            let _ = control.set_attribute("aria-label", label);
            let _ = control.set_attribute("title", label);
        }

        !controls.is_empty()
    }

    fn pulse_toggle(&self) {
        for control in query_all(&self.selector) {
            if set_style(&control, "transform", "scale(0.8)").is_err() {
                continue;
            }
            Timeout::new(self.pulse_ms, move || {
                let _ = set_style(&control, "transform", "scale(1)");
            })
            .forget();
        }
    }
}
