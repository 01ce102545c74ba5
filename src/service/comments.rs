//! Comment queries.

use crate::error::AppError;
use crate::models::Comment;
use sqlx::PgPool;

pub struct CommentService;

impl CommentService {
    /// Comments for one article, newest first (ties broken by id). An unknown article and an
    /// article without comments both yield an empty list; pair with
    /// [`ArticleService::ensure_exists`](crate::service::ArticleService::ensure_exists) to tell them apart.
    pub async fn list_by_article(pool: &PgPool, article_id: i32) -> Result<Vec<Comment>, AppError> {
        const SQL: &str = r#"
            SELECT comment_id, article_id, author, body, votes, created_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at DESC, comment_id DESC
        "#;
        tracing::debug!(sql = %SQL, article_id, "query");
        let comments = sqlx::query_as::<_, Comment>(SQL)
            .bind(article_id)
            .fetch_all(pool)
            .await?;
        Ok(comments)
    }
}
