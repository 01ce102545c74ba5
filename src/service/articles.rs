//! Article queries. Every article leaves this module with its `comment_count` attached.

use crate::error::AppError;
use crate::models::Article;
use sqlx::PgPool;

const LIST_SQL: &str = r#"
    SELECT articles.article_id, articles.title, articles.topic, articles.author, articles.body,
           articles.created_at, articles.votes,
           COUNT(comments.comment_id)::INT AS comment_count
    FROM articles
    LEFT JOIN comments ON articles.article_id = comments.article_id
    GROUP BY articles.article_id
    ORDER BY articles.created_at DESC, articles.article_id DESC
"#;

const BY_ID_SQL: &str = r#"
    SELECT articles.article_id, articles.title, articles.topic, articles.author, articles.body,
           articles.created_at, articles.votes,
           COUNT(comments.comment_id)::INT AS comment_count
    FROM articles
    LEFT JOIN comments ON articles.article_id = comments.article_id
    WHERE articles.article_id = $1
    GROUP BY articles.article_id
"#;

// Single statement: the increment happens in the store, never as read-modify-write.
const INC_VOTES_SQL: &str = r#"
    WITH updated AS (
        UPDATE articles
        SET votes = votes + $2
        WHERE article_id = $1
        RETURNING *
    )
    SELECT updated.article_id, updated.title, updated.topic, updated.author, updated.body,
           updated.created_at, updated.votes,
           (SELECT COUNT(*)::INT FROM comments WHERE comments.article_id = updated.article_id) AS comment_count
    FROM updated
"#;

const EXISTS_SQL: &str = "SELECT article_id FROM articles WHERE article_id = $1";

pub struct ArticleService;

impl ArticleService {
    /// All articles, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, AppError> {
        tracing::debug!(sql = %LIST_SQL, "query");
        let articles = sqlx::query_as::<_, Article>(LIST_SQL).fetch_all(pool).await?;
        Ok(articles)
    }

    pub async fn get(pool: &PgPool, article_id: i32) -> Result<Article, AppError> {
        tracing::debug!(sql = %BY_ID_SQL, article_id, "query");
        sqlx::query_as::<_, Article>(BY_ID_SQL)
            .bind(article_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(AppError::article_not_found)
    }

    /// `votes := votes + delta`. Any delta is accepted, including zero and values that take
    /// the total below zero; overflowing the column is rejected by the store.
    pub async fn increment_votes(pool: &PgPool, article_id: i32, delta: i32) -> Result<Article, AppError> {
        tracing::debug!(sql = %INC_VOTES_SQL, article_id, delta, "query");
        sqlx::query_as::<_, Article>(INC_VOTES_SQL)
            .bind(article_id)
            .bind(delta)
            .fetch_optional(pool)
            .await?
            .ok_or_else(AppError::article_not_found)
    }

    /// Resolves when the article exists, otherwise fails with "Article not found".
    pub async fn ensure_exists(pool: &PgPool, article_id: i32) -> Result<(), AppError> {
        tracing::debug!(sql = %EXISTS_SQL, article_id, "query");
        let row: Option<(i32,)> = sqlx::query_as(EXISTS_SQL)
            .bind(article_id)
            .fetch_optional(pool)
            .await?;
        row.map(|_| ()).ok_or_else(AppError::article_not_found)
    }
}
