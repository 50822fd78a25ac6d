//! Backend API Bindings
//!
//! Thin `fetch` wrappers for the idea backend, organized by endpoint.

mod idea;
mod feedback;
mod stats;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use idea::*;
pub use feedback::*;
pub use stats::*;

/// Run a request and return the response, failing on non-2xx
async fn send(request: &web_sys::Request) -> ApiResult<web_sys::Response> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(ApiError::network)?;
    let resp: web_sys::Response = resp_value.dyn_into().map_err(ApiError::decode)?;

    if !resp.ok() {
        web_sys::console::warn_1(&format!("[API] {} -> {}", resp.url(), resp.status()).into());
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

/// GET `url` and decode the JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;

    let resp = send(&request).await?;
    let json = JsFuture::from(resp.json().map_err(ApiError::decode)?)
        .await
        .map_err(ApiError::decode)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST `body` as JSON to `url`, ignoring the response body
pub(crate) async fn post_json<B: Serialize>(url: &str, body: &B) -> ApiResult<()> {
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;

    let headers = web_sys::Headers::new().map_err(ApiError::network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(ApiError::network)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&payload));
    let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;

    send(&request).await?;
    Ok(())
}
