//! Shared constants: DOM contract, media queries, timings, geometry.

// ── Theme ───────────────────────────────────────────────────────

/// Default `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

pub const CLASS_THEME_DARK: &str = "theme-dark";
pub const CLASS_THEME_LIGHT: &str = "theme-light";

pub const SELECTOR_THEME_TOGGLE: &str = ".theme-toggle";
pub const SELECTOR_BRAND_LOGO: &str = ".brand-logo";
pub const SELECTOR_PORTFOLIO_IMG: &str = ".card-media img[data-light-src][data-dark-src]";

pub const ATTR_LIGHT_SRC: &str = "data-light-src";
pub const ATTR_DARK_SRC: &str = "data-dark-src";
pub const ATTR_HOVER_SRC: &str = "data-hover-src";
pub const ATTR_MODE: &str = "data-mode";

pub const TOOLTIP_CLASS: &str = "theme-tooltip";

/// Gap between the tooltip's bottom edge and the toggle's top edge, in CSS pixels.
pub const TOOLTIP_GAP_PX: f64 = 10.0;

/// Toggle press animation length.
pub const PRESS_ANIMATION_MS: f64 = 180.0;

// ── Media queries ───────────────────────────────────────────────

pub const QUERY_PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

/// Touch/tablet layout: hover variants become the default image.
pub const QUERY_TOUCH_LAYOUT: &str = "(max-width: 1199px)";

/// Compact toggle icon (mobile glyph instead of desktop glyph).
pub const QUERY_COMPACT_TOGGLE: &str = "(max-width: 879.98px)";

/// Desktop pointer affordances (tooltip, press animation).
pub const QUERY_DESKTOP: &str = "(min-width: 880px)";

// ── Navigation ──────────────────────────────────────────────────

pub const SELECTOR_NAV_TOGGLE: &str = ".nav-toggle";
pub const SITE_NAV_ID: &str = "site-nav";
pub const SELECTOR_NAV_LINKS: &str = ".nav-list a";
pub const SELECTOR_FOOTER_LINKS: &str = ".footer-links a";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_ACTIVE: &str = "active";

/// Pages whose links stay active anywhere below a path containing their name.
pub const SECTION_PAGE_TOKENS: [&str; 3] = ["team", "privacy", "imprint"];

// ── Scroll effects ──────────────────────────────────────────────

pub const SELECTOR_SITE_HEADER: &str = ".site-header";
pub const SELECTOR_BACK_TO_TOP: &str = ".back-to-top";
pub const SELECTOR_SCROLL_DOWN: &str = ".scroll-down-btn";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";

// ── Hover swap ──────────────────────────────────────────────────

pub const SELECTOR_CARD: &str = ".card";
pub const SELECTOR_CARD_IMG: &str = ".card-media img";

/// Image extensions that get a `-hover` sibling when none is declared.
pub const HOVER_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".svg"];

// ── Reveal ──────────────────────────────────────────────────────

pub const SELECTOR_REVEAL: &str = ".reveal-up";
pub const CLASS_CARD: &str = "card";
pub const CLASS_TEAM_MEMBER: &str = "team-member";
pub const CLASS_IS_HIDDEN: &str = "is-hidden";
pub const CLASS_IS_VISIBLE: &str = "is-visible";

/// How far below the viewport an element may start and still count as visible at load.
pub const REVEAL_BELOW_TOLERANCE_PX: f64 = 300.0;

/// How far above the viewport an element may end and still count as visible at load.
pub const REVEAL_ABOVE_TOLERANCE_PX: f64 = 100.0;

pub const REVEAL_BASE_DELAY_MS: u32 = 200;
pub const REVEAL_STEP_DELAY_MS: u32 = 30;

/// Wait after two animation frames before the initial sweep.
pub const REVEAL_SETTLE_MS: u32 = 100;

pub const EARLY_ROOT_MARGIN: &str = "300px 0px -100px 0px";
pub const EARLY_THRESHOLD: f64 = 0.01;
pub const PLAIN_THRESHOLD: f64 = 0.1;

// ── Floating nav ────────────────────────────────────────────────

pub const SELECTOR_FLOATING_LINKS: &str = ".floating-nav-list a";

/// Look-ahead added to `scrollY` when picking the active section.
pub const SECTION_LOOKAHEAD_PX: f64 = 150.0;

/// Slack above the first section inside which it is still forced active.
pub const SECTION_TOP_SLACK_PX: f64 = 100.0;

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` configuration island.
pub const CONFIG_ELEMENT_ID: &str = "site-behavior-config";
