//! Resource routes, mounted under `/api`.

use super::route_not_found;
use crate::handlers::{get_article, list_article_comments, list_articles, list_topics, list_users, patch_article};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Every route carries a method fallback so an unsupported method answers like an unknown path.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/topics", get(list_topics).fallback(route_not_found))
        .route("/articles", get(list_articles).fallback(route_not_found))
        .route(
            "/articles/:article_id",
            get(get_article).patch(patch_article).fallback(route_not_found),
        )
        .route(
            "/articles/:article_id/comments",
            get(list_article_comments).fallback(route_not_found),
        )
        .route("/users", get(list_users).fallback(route_not_found))
        .with_state(state)
}
