use std::sync::Arc;

use crate::config::ServerConfig;
use crate::enrollment::AssignmentService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and everything else is
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: schoolhouse_db::DbPool,
    /// Server configuration (read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// Class assignment consistency service.
    pub assignments: Arc<AssignmentService>,
}

impl AppState {
    pub fn new(pool: schoolhouse_db::DbPool, config: ServerConfig) -> Self {
        let assignments = Arc::new(AssignmentService::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            assignments,
        }
    }
}
