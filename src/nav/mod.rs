//! Mobile nav panel state and active page-link matching.
//!
//! Link matching compares the current page name against each link's own page
//! name. `team`, `privacy` and `imprint` links also stay active for any path
//! containing their name, and the `index` link is active at the site root.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(feature = "browser")]
pub mod controller;

use crate::consts::SECTION_PAGE_TOKENS;

/// Lower-cased location of the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    /// Full lower-cased path, e.g. `/about/team.html`.
    pub path: String,
    /// Last path segment, e.g. `team.html`; empty at a directory root.
    pub file: String,
}

impl PageLocation {
    #[must_use]
    pub fn from_pathname(pathname: &str) -> Self {
        let path = pathname.to_lowercase();
        let file = last_segment(&path).to_owned();
        Self { path, file }
    }

    /// File name without its `.html` extension.
    #[must_use]
    pub fn page(&self) -> String {
        strip_html(&self.file)
    }
}

/// Whether a nav or footer link with `href` points at the current page.
#[must_use]
pub fn link_is_active(location: &PageLocation, href: &str) -> bool {
    let href = href.to_lowercase();
    let link_file = match last_segment(&href) {
        "" => href.as_str(),
        file => file,
    };
    let link_page = strip_html(link_file);

    location.file == link_file
        || location.page() == link_page
        || SECTION_PAGE_TOKENS
            .iter()
            .any(|token| link_page == *token && location.path.contains(token))
        || (link_page == "index" && (location.file.is_empty() || location.file == "index.html"))
}

/// `aria-expanded` value after the toggle is pressed, given its current value.
#[must_use]
pub fn expanded_after_toggle(aria_expanded: Option<&str>) -> bool {
    aria_expanded != Some("true")
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

fn strip_html(name: &str) -> String {
    name.replacen(".html", "", 1)
}
