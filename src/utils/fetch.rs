//! Network fetching utilities with timeout support.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Timeout
// =============================================================================

/// Await `promise`, giving up after `timeout_ms`.
///
/// The timer resolves to `undefined`, which a `Response` never is. A timed
/// out fetch keeps running in the browser and its result is ignored.
async fn with_timeout(promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let settled = JsFuture::from(Promise::race(&Array::of2(&promise, &timer)))
        .await
        .map_err(|e| FetchError::NetworkError(rejection_message(&e)))?;

    if settled.is_undefined() {
        Err(FetchError::Timeout)
    } else {
        Ok(settled)
    }
}

/// Message of a rejected fetch (usually a `TypeError`).
fn rejection_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "fetch rejected".to_string())
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_url(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// `GET` request for `url`. CORS mode so a cross-origin `API_BASE` works.
fn build_request(url: &str) -> Result<Request, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)
}

/// Fetch text from a URL using the Fetch API with timeout.
async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let request = build_request(url)?;

    let settled = with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await?;
    let resp: Response = settled.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
