use crate::error::AppError;
use crate::response::success_ok;
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(success_ok("users", users))
}
