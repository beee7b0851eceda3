//! Catalog, client config and health handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use avesafe_client::net::types::ClientConfig;
use serde_json::Value;

use crate::state::AppState;

/// `GET /courses.json` — the validated catalog as loaded at startup.
pub async fn courses(State(state): State<AppState>) -> Json<Value> {
    Json(state.catalog.raw().clone())
}

/// `GET /api/client-config` — Firebase settings and admin allowlist.
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client_config.as_ref().clone())
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
