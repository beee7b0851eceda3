//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Both
//! members are immutable after startup and shared behind `Arc`.

use std::sync::Arc;

use avesafe_client::net::types::ClientConfig;

use crate::catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub client_config: Arc<ClientConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, client_config: ClientConfig) -> Self {
        Self { catalog: Arc::new(catalog), client_config: Arc::new(client_config) }
    }
}
