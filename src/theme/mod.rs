//! Three-state theme preference and the derived toggle appearance.
//!
//! Reads the visitor's preference through an injected [`PreferenceStore`],
//! normalizes anything unexpected to [`ThemeMode::System`], and derives the
//! toggle button's icon, label and pressed state from the mode alone.
//!
//! DESIGN
//! ======
//! The model here never touches the DOM. The browser half lives in
//! [`controller`] (behind the `browser` feature) and only translates these
//! values into class flags, attributes and image sources.


#[cfg(feature = "browser")]
pub mod controller;
pub mod store;
#[cfg(feature = "browser")]
mod tooltip;

use std::fmt;

use crate::consts::{CLASS_THEME_DARK, CLASS_THEME_LIGHT};

pub use store::{MemoryStore, PreferenceStore};

/// Visitor's chosen display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Follow the OS color scheme.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [Self; 3] = [Self::System, Self::Light, Self::Dark];

    /// Parse a persisted token. Only the exact lower-case tokens are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Persisted token for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Next mode in the toggle cycle: system → dark → light → system.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::System,
        }
    }

    /// Effective darkness once the OS color scheme is taken into account.
    #[must_use]
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::System => system_prefers_dark,
        }
    }

    /// Class flag placed on `<body>`; `System` carries none.
    #[must_use]
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Self::System => None,
            Self::Light => Some(CLASS_THEME_LIGHT),
            Self::Dark => Some(CLASS_THEME_DARK),
        }
    }

    /// Human-readable description used for the tooltip and accessible label.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::System => "Same as system",
            Self::Light => "Light mode",
            Self::Dark => "Dark mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted preference, read and written through a [`PreferenceStore`].
pub struct ThemePreference {
    store: Box<dyn PreferenceStore>,
}

impl ThemePreference {
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self { store: Box::new(store) }
    }

    /// Read the stored mode, rewriting a missing or invalid value as `system`.
    pub fn load(&self) -> ThemeMode {
        let raw = self.store.read();
        if let Some(mode) = raw.as_deref().and_then(ThemeMode::parse) {
            return mode;
        }
        log::info!("theme preference {raw:?} is not valid; resetting to system");
        self.store.write(ThemeMode::System.as_str());
        ThemeMode::System
    }

    /// Read the stored mode without writing; anything unexpected reads as `system`.
    #[must_use]
    pub fn current(&self) -> ThemeMode {
        self.store
            .read()
            .as_deref()
            .and_then(ThemeMode::parse)
            .unwrap_or_default()
    }

    pub fn set(&self, mode: ThemeMode) {
        self.store.write(mode.as_str());
    }

    /// Advance the stored mode one step through the cycle and return it.
    pub fn cycle(&self) -> ThemeMode {
        let next = self.current().next();
        self.set(next);
        next
    }
}

/// Everything a `.theme-toggle` button displays for one mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleAppearance {
    pub mode: ThemeMode,
    pub icon_class: &'static str,
    pub tooltip: &'static str,
    pub aria_label: String,
    pub aria_pressed: bool,
}

impl ToggleAppearance {
    /// `compact` selects the mobile glyph for the system mode.
    #[must_use]
    pub fn new(mode: ThemeMode, compact: bool) -> Self {
        let icon_class = match mode {
            ThemeMode::Dark => "pi pi-moon",
            ThemeMode::Light => "pi pi-sun",
            ThemeMode::System if compact => "pi pi-mobile",
            ThemeMode::System => "pi pi-desktop",
        };
        let tooltip = mode.description();
        Self {
            mode,
            icon_class,
            tooltip,
            aria_label: format!("Theme toggle: {tooltip}"),
            aria_pressed: mode != ThemeMode::System,
        }
    }

    /// Inner markup of the button: a visually-hidden label and the icon.
    #[must_use]
    pub fn inner_html(&self) -> String {
        format!(
            r#"<span class="theme-toggle-label">theme</span><i class="{}" aria-hidden="true"></i>"#,
            self.icon_class
        )
    }
}

/// Scale keyframes for the toggle's press feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressFeedback {
    /// Pointer is already over the button (it sits at its hover scale).
    Hovered,
    Resting,
}

impl PressFeedback {
    #[must_use]
    pub fn from_hover(hovered: bool) -> Self {
        if hovered { Self::Hovered } else { Self::Resting }
    }

    #[must_use]
    pub fn scales(self) -> [f64; 3] {
        match self {
            Self::Hovered => [1.05, 1.00, 1.05],
            Self::Resting => [1.00, 0.99, 1.00],
        }
    }

    /// CSS `transform` values, one per keyframe.
    #[must_use]
    pub fn transforms(self) -> [String; 3] {
        self.scales().map(|s| format!("scale({s:.2})"))
    }
}

/// Tooltip anchor: horizontally centered on the button, a small gap above it.
#[must_use]
pub fn tooltip_anchor(left: f64, top: f64, width: f64) -> (f64, f64) {
    (left + width / 2.0, top - crate::consts::TOOLTIP_GAP_PX)
}
