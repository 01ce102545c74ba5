//! Topic queries.

use crate::error::AppError;
use crate::models::Topic;
use sqlx::PgPool;

pub struct TopicService;

impl TopicService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, AppError> {
        const SQL: &str = "SELECT slug, description FROM topics";
        tracing::debug!(sql = %SQL, "query");
        let topics = sqlx::query_as::<_, Topic>(SQL).fetch_all(pool).await?;
        Ok(topics)
    }
}
