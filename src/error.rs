//! Error types for page mounting and configuration.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is ever shown to the visitor. Mount failures deactivate the
//! one component that hit them and are logged; config failures fall back to
//! defaults.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while wiring a page component to the document.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// No `window` or `document` (non-browser host or detached frame).
    #[error("browser document unavailable")]
    NoDocument,

    /// A required element id is absent from the page.
    #[error("missing element #{0}")]
    MissingElement(String),

    /// No element matched a required selector.
    #[error("no element matches `{0}`")]
    MissingSelector(String),

    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Js(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Failure while reading the inline site configuration block.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The block is present but is not a valid config object.
    #[error("site config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
