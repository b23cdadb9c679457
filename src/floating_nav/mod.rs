//! Active-section search for the floating in-page navigation.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(feature = "browser")]
pub mod controller;

use crate::consts::{SECTION_LOOKAHEAD_PX, SECTION_TOP_SLACK_PX};

/// Index of the section to highlight, given section top offsets in document order.
///
/// The cursor is `scroll_y` plus a look-ahead. The deepest section whose top has
/// been passed wins. While the cursor is still well above the first section,
/// the first section is forced active; in the slack band just above it no
/// section is active.
#[must_use]
pub fn active_section(section_tops: &[f64], scroll_y: f64) -> Option<usize> {
    let first_top = *section_tops.first()?;
    let cursor = scroll_y + SECTION_LOOKAHEAD_PX;
    if cursor < first_top - SECTION_TOP_SLACK_PX {
        return Some(0);
    }
    section_tops.iter().rposition(|top| cursor >= *top)
}

/// Section id addressed by an in-page link (`#about` → `about`).
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
