//! Error type for browser glue and the best-effort `Absorb` extension.
//!
//! TRADE-OFFS
//! ==========
//! Every behavior is additive sugar over a working page, so no error is ever
//! surfaced to the visitor. Errors still travel as values up to the component
//! boundary, where they are logged and dropped.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure raised while wiring behavior onto the page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No global `window` (not running in a browser main thread).
    #[error("window is not available")]
    NoWindow,
    /// The window has no document.
    #[error("document is not available")]
    NoDocument,
    /// The document has no `<body>` yet.
    #[error("document body is not available")]
    NoBody,
    /// A DOM or JS API call threw.
    #[error("javascript error: {0}")]
    Js(String),
    /// The configuration island could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

/// Consume a fallible best-effort call, logging the failure at `debug`.
pub trait Absorb {
    /// Drop the result; an error is logged with `context` and otherwise ignored.
    fn absorb(self, context: &str);
}

impl<T, E> Absorb for Result<T, E>
where
    E: Into<SiteError>,
{
    fn absorb(self, context: &str) {
        if let Err(err) = self {
            let err: SiteError = err.into();
            log::debug!("{context}: {err}");
        }
    }
}
