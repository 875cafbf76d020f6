//! Boot-time error types.
//!
//! Interaction handlers never fail: a missing element is a supported page
//! configuration, not an error. Only wiring the controller to the page can go
//! wrong, and those failures are collected here.

use thiserror::Error;

/// Errors raised while booting the controller against a live document.
#[derive(Debug, Error)]
pub enum FolioError {
    /// The script is not running inside a browser window.
    #[error("No window: folio-ui must run inside a browser window")]
    NoWindow,

    /// The window has no document attached.
    #[error("No document: window has no document attached")]
    NoDocument,

    /// The document has no `<body>` yet.
    #[error("No body: document has no body element")]
    NoBody,

    /// The inline configuration script held malformed JSON.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A JavaScript exception surfaced through `web_sys`.
    #[error("JavaScript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FolioError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
