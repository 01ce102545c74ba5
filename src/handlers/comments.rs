//! Comment handlers.

use crate::error::AppError;
use crate::response::success_ok;
use crate::service::{parse_article_id, ArticleService, CommentService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// GET /api/articles/:article_id/comments
///
/// The listing and the existence check run concurrently. The listing alone cannot tell an
/// article without comments from a missing article, so the check decides between
/// `200 { comments: [] }` and 404. The first failure of either query wins.
pub async fn list_article_comments(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_article_id(&id_str)?;
    let (comments, ()) = tokio::try_join!(
        CommentService::list_by_article(&state.pool, article_id),
        ArticleService::ensure_exists(&state.pool, article_id)
    )?;
    Ok(success_ok("comments", comments))
}
