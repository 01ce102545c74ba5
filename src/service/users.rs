//! User queries.

use crate::error::AppError;
use crate::models::User;
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
        const SQL: &str = "SELECT username, name, avatar_url FROM users";
        tracing::debug!(sql = %SQL, "query");
        let users = sqlx::query_as::<_, User>(SQL).fetch_all(pool).await?;
        Ok(users)
    }
}
