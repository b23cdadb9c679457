//! Scroll-driven chrome: header shadow, back-to-top button, smooth jumps.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(feature = "browser")]
pub mod controller;

/// The header gets its shadow as soon as the page has scrolled at all.
#[must_use]
pub fn header_is_scrolled(scroll_top: f64) -> bool {
    scroll_top > 0.0
}

/// The back-to-top button appears once more than one viewport has scrolled by.
#[must_use]
pub fn back_to_top_visible(scroll_top: f64, viewport_height: f64) -> bool {
    scroll_top > viewport_height
}
