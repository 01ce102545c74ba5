//! Shared application state for all routes.

use sqlx::PgPool;

/// The only process-wide state: one pool created at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
