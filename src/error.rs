//! API Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("window not available")]
    NoWindow,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Best-effort text for a rejected JS promise
pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

impl ApiError {
    pub(crate) fn network(value: JsValue) -> Self {
        ApiError::Network(js_message(&value))
    }

    pub(crate) fn decode(value: JsValue) -> Self {
        ApiError::Decode(js_message(&value))
    }
}
