//! Runtime configuration.
//!
//! Pages may embed a JSON island
//! (`<script type="application/json" id="site-behavior-config">`) to override
//! defaults. Every field is optional; an absent island means defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::THEME_STORAGE_KEY;
use crate::error::SiteError;

/// Tunables shared by all behavior components.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Delay between pointer-enter and the theme tooltip appearing.
    pub tooltip_delay_ms: u32,
    /// Quiet period after the last resize before card images are re-evaluated.
    pub resize_debounce_ms: u32,
    /// Element id the scroll-down button scrolls to.
    pub scroll_target_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            storage_key: THEME_STORAGE_KEY.to_owned(),
            tooltip_delay_ms: 150,
            resize_debounce_ms: 250,
            scroll_target_id: "portfolio".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON island. Unknown fields are ignored.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    /// Resolved log level; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Read the configuration island from `document`, falling back to defaults.
    #[cfg(feature = "browser")]
    #[must_use]
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(crate::consts::CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}
