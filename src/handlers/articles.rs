//! Article handlers: list, read, increment votes.

use crate::error::AppError;
use crate::response::success_ok;
use crate::service::{parse_article_id, ArticleService, VotePatch};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// GET /api/articles
pub async fn list_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::list(&state.pool).await?;
    Ok(success_ok("articles", articles))
}

/// GET /api/articles/:article_id
pub async fn get_article(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_article_id(&id_str)?;
    let article = ArticleService::get(&state.pool, article_id).await?;
    Ok(success_ok("article", article))
}

/// PATCH /api/articles/:article_id with `{ "inc_votes": <integer> }`
pub async fn patch_article(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_article_id(&id_str)?;
    let Json(body) = body?;
    let patch = VotePatch::from_body(&body)?;
    let article = ArticleService::increment_votes(&state.pool, article_id, patch.inc_votes).await?;
    Ok(success_ok("article", article))
}
