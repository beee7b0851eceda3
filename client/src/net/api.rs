//! HTTP helpers for the static catalog and the public client configuration.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! requests are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a missing catalog or
//! config degrades to a log line and an empty section.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ClientConfig, Course};

/// Path of the static course catalog resource.
pub const CATALOG_URL: &str = "/courses.json";

/// Path of the public runtime configuration served by the host.
pub const CLIENT_CONFIG_URL: &str = "/api/client-config";

/// Failure fetching or decoding a JSON resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not available on server")]
    Unavailable,
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode {url}: {message}")]
    Decode { url: String, message: String },
}

/// Fetch the course catalog. Issued fresh on every page load; no retry.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not OK, or the body
/// is not a JSON array of courses.
pub async fn fetch_courses() -> Result<Vec<Course>, ApiError> {
    get_json(CATALOG_URL).await
}

/// Fetch the Firebase settings and admin allowlist for this deployment.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_client_config() -> Result<ClientConfig, ApiError> {
    get_json(CLIENT_CONFIG_URL).await
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, &e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { url: url.to_owned(), status: resp.status() });
        }
        let body = resp.text().await.map_err(|e| transport_error(url, &e.to_string()))?;
        decode_body(url, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(url: &str, message: &str) -> ApiError {
    ApiError::Transport { url: url.to_owned(), message: message.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: serde::de::DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode { url: url.to_owned(), message: e.to_string() })
}
