use thiserror::Error;

/// Everything that can go wrong while putting the page together.
///
/// None of these are fatal: callers log them and fall back to a static
/// rendering. Only a panic reaches the global recovery view (see `crash`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("content error: {0}")]
    Content(String),
    #[error("environment read failed: {0}")]
    Environment(String),
    #[error("section `{section}` did not load within {after_ms} ms")]
    LoadTimedOut { section: &'static str, after_ms: u32 },
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        PageError::Content(err.to_string())
    }
}

/// Browser APIs report failures as opaque `JsValue`s; keep whatever text they carry.
pub fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
