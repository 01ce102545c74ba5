use crate::error::AppError;
use crate::response::success_ok;
use crate::service::TopicService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /api/topics
pub async fn list_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics = TopicService::list(&state.pool).await?;
    Ok(success_ok("topics", topics))
}
