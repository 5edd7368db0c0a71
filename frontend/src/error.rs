use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser APIs the site leans on. None of these reach the
/// visitor: callers log them and fall back to a harmless default.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("window is not available")]
    NoWindow,
    #[error("document has no body")]
    NoBody,
    #[error("element is not mounted")]
    NotMounted,
    #[error("IntersectionObserver is unavailable: {0}")]
    ObserverUnavailable(String),
    #[error("failed to write style property `{property}`: {reason}")]
    Style { property: &'static str, reason: String },
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("alert failed: {0}")]
    Alert(String),
}

impl UiError {
    pub fn describe(value: &JsValue) -> String {
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value))
    }
}
