//! Interactive behavior for the marketing site, compiled to WebAssembly.
//!
//! The page markup and stylesheet already define every element and class this
//! crate touches; the crate only wires behavior onto them. Each behavior is a
//! pure model that native tests exercise, plus a browser component (behind the
//! `browser` feature) that owns its DOM references and exposes `attach()`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme preference, toggle appearance, Theme Controller |
//! | [`images`] | Light/dark/hover image source rules |
//! | [`nav`] | Mobile menu and active page-link matching |
//! | [`scroll`] | Header shadow, back-to-top, scroll-down button |
//! | `hover` | Card image hover swap (browser only) |
//! | [`reveal`] | Reveal-on-scroll groups and initial sweep |
//! | [`floating_nav`] | Active section for the floating in-page nav |
//! | [`config`] | Runtime configuration from an optional JSON island |
//! | [`error`] | `SiteError` and best-effort error absorption |
//! | [`consts`] | DOM contract, media queries, timings |

pub mod config;
pub mod consts;
pub mod error;
pub mod floating_nav;
pub mod images;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod hover;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: runs once when the module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = app::start() {
        log::error!("site behavior failed to start: {err}");
    }
}
