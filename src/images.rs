//! Image source selection for themed and hover-swapped images.
//!
//! An image may declare `data-light-src`, `data-dark-src` and
//! `data-hover-src`. The displayed `src` is always recomputed from those
//! variants plus the current theme, layout and hover state; nothing is cached.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::consts::HOVER_EXTENSIONS;

/// Alternate sources declared on one `<img>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageVariants {
    pub light: Option<String>,
    pub dark: Option<String>,
    pub hover: Option<String>,
}

impl ImageVariants {
    /// Themed source; requires both the light and the dark variant.
    #[must_use]
    pub fn themed(&self, dark: bool) -> Option<&str> {
        match (&self.light, &self.dark) {
            (Some(light), Some(dark_src)) => Some(if dark { dark_src.as_str() } else { light.as_str() }),
            _ => None,
        }
    }

    /// Default source of a portfolio card image after a theme change.
    ///
    /// The touch layout has no hover, so the hover variant becomes the default.
    #[must_use]
    pub fn card_default(&self, dark: bool, touch_layout: bool) -> Option<&str> {
        if touch_layout && let Some(hover) = self.hover.as_deref() {
            return Some(hover);
        }
        self.themed(dark)
    }

    /// Source restored when the pointer leaves a card.
    ///
    /// Dark variant when dark and declared, else the light variant, else `current`.
    #[must_use]
    pub fn resting<'a>(&'a self, dark: bool, current: &'a str) -> &'a str {
        if dark && let Some(dark_src) = self.dark.as_deref() {
            return dark_src;
        }
        self.light.as_deref().unwrap_or(current)
    }

    /// Hover source, derived from `current` when none is declared.
    #[must_use]
    pub fn hover_or_derived(&self, current: &str) -> String {
        self.hover.clone().unwrap_or_else(|| derive_hover_src(current))
    }

    /// Source a card image should show after a layout change.
    ///
    /// Touch layouts take the declared hover variant; anything else falls back
    /// to [`Self::resting`]. Nothing is derived from `current`, so applying the
    /// result again yields the same source.
    #[must_use]
    pub fn card_source<'a>(&'a self, dark: bool, touch_layout: bool, current: &'a str) -> &'a str {
        if touch_layout && let Some(hover) = self.hover.as_deref() {
            return hover;
        }
        self.resting(dark, current)
    }

    /// Read the `data-*` variants off an element.
    #[cfg(feature = "browser")]
    #[must_use]
    pub fn from_element(el: &web_sys::Element) -> Self {
        use crate::consts::{ATTR_DARK_SRC, ATTR_HOVER_SRC, ATTR_LIGHT_SRC};

        Self {
            light: el.get_attribute(ATTR_LIGHT_SRC),
            dark: el.get_attribute(ATTR_DARK_SRC),
            hover: el.get_attribute(ATTR_HOVER_SRC),
        }
    }
}

/// Insert `-hover` before the first `.png`, `.jpg` or `.svg` in `src`.
///
/// Each extension is rewritten at its first occurrence, in that order; a source
/// with none of them is returned unchanged.
#[must_use]
pub fn derive_hover_src(src: &str) -> String {
    HOVER_EXTENSIONS.iter().fold(src.to_owned(), |acc, ext| {
        acc.replacen(ext, &format!("-hover{ext}"), 1)
    })
}
