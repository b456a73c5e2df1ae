use std::sync::Arc;

use atelier_storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration (JWT secrets, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
    /// Object-storage adapter for uploaded media. Injected explicitly so tests
    /// can run against an unconfigured client.
    pub storage: Arc<dyn ObjectStore>,
}
