//! Router assembly: common routes, `/api` resources, the "Path not found" fallback and the
//! tower-http layers shared by every route.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Oversized bodies fail inside the `Json` extractor and are answered as a bad request.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Unknown path, or a known path with an unsupported method.
pub async fn route_not_found() -> AppError {
    AppError::path_not_found()
}

/// The complete application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
