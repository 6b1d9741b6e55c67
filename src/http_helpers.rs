//! HTTP helper functions for the Crux Core
//!
//! Both endpoints of the device are handled here by decoding the response
//! body without consulting the HTTP status code: the page this core drives
//! used `fetch`, which only fails on transport errors, so a device-level
//! rejection still carries a body worth showing.

use crux_http::Response;

/// Base URL for the device API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` (v0.16.0-rc2)
/// requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase` error). The page shell strips this prefix
/// before sending requests via `fetch()`, making them relative to the
/// captive portal's own origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wifi_setup_core::http_helpers::build_url;
/// let url = build_url("/api/scan");
/// assert_eq!(url, "https://relative/api/scan");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Decode the response body as JSON.
///
/// Returns an error when the body is missing or does not parse as `T`.
pub fn decode_json_body<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Take the response body as text.
///
/// Decodes as UTF-8 with replacement characters and treats a missing body
/// as the empty string, matching the page's `Response.text()` semantics.
pub fn take_text_body(response: &mut Response<Vec<u8>>) -> String {
    match response.take_body() {
        Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        None => String::new(),
    }
}
