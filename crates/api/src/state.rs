use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cellar_db::DbPool,
    /// Server configuration (bind address, CORS, household identifier).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The deployment's fixed household identifier.
    pub fn household(&self) -> &str {
        &self.config.household
    }
}
