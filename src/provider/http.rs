//! Shared HTTP client construction and error mapping.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{ConciergeError, Result};

/// Build the client used for completion calls.
///
/// No client-level timeout: the resolver bounds each call itself.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("concierge/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(4)
        .build()
        .map_err(ConciergeError::from)
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Turn a non-2xx response into an API error, preferring the service's
/// own `error.message` over the raw body.
pub fn status_to_error(status: u16, body: &str) -> ConciergeError {
    let message = extract_error_message(body).unwrap_or_else(|| body.trim().to_string());
    ConciergeError::api(status, message)
}

fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
