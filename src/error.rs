//! Typed errors and HTTP mapping.
//!
//! Handlers never decide status codes themselves: every failure is returned as an [`AppError`]
//! and resolved here by an ordered list of classifiers. The first classifier that recognises
//! the failure produces the response; anything left over is logged and reported as a 500.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const BAD_REQUEST_MSG: &str = "Bad request";
pub const SERVER_ERROR_MSG: &str = "server error";
pub const ARTICLE_NOT_FOUND_MSG: &str = "Article not found";
pub const PATH_NOT_FOUND_MSG: &str = "Path not found";

/// PostgreSQL SQLSTATE codes caused by malformed client input rather than a server fault:
/// invalid_text_representation, not_null_violation, numeric_value_out_of_range.
pub const BAD_INPUT_CODES: &[&str] = &["22P02", "23502", "22003"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("migration: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    pub fn article_not_found() -> Self {
        AppError::NotFound(ARTICLE_NOT_FOUND_MSG.into())
    }

    pub fn path_not_found() -> Self {
        AppError::NotFound(PATH_NOT_FOUND_MSG.into())
    }

    /// Run the classifier chain. Never fails: unclassified errors fall through to 500.
    pub fn classify(&self) -> (StatusCode, String) {
        CLASSIFIERS
            .iter()
            .find_map(|classifier| classifier(self))
            .unwrap_or_else(|| {
                tracing::error!(error = %self, "unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MSG.to_string())
            })
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

type Classifier = fn(&AppError) -> Option<(StatusCode, String)>;

const CLASSIFIERS: &[Classifier] = &[classify_custom, classify_store];

/// Errors raised by application code carry their own status and message.
fn classify_custom(err: &AppError) -> Option<(StatusCode, String)> {
    match err {
        AppError::NotFound(msg) => Some((StatusCode::NOT_FOUND, msg.clone())),
        AppError::BadRequest(detail) => {
            tracing::debug!(detail = %detail, "rejected request");
            Some((StatusCode::BAD_REQUEST, BAD_REQUEST_MSG.to_string()))
        }
        _ => None,
    }
}

fn classify_store(err: &AppError) -> Option<(StatusCode, String)> {
    let AppError::Db(sqlx::Error::Database(db_err)) = err else {
        return None;
    };
    let code = db_err.code()?;
    if is_bad_input_code(&code) {
        tracing::debug!(code = %code, message = db_err.message(), "store rejected input");
        Some((StatusCode::BAD_REQUEST, BAD_REQUEST_MSG.to_string()))
    } else {
        None
    }
}

pub fn is_bad_input_code(code: &str) -> bool {
    BAD_INPUT_CODES.contains(&code)
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.classify();
        (status, Json(ErrorBody { msg })).into_response()
    }
}
