//! Request validation: path identifiers and PATCH bodies.

use crate::error::AppError;
use serde_json::Value;

/// Article ids are `INT` in the store; anything that is not a base-10 `i32` is a bad request.
pub fn parse_article_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("invalid article_id '{}'", raw)))
}

/// Body of `PATCH /api/articles/:article_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VotePatch {
    pub inc_votes: i32,
}

impl VotePatch {
    /// `inc_votes` must be present and an integral number that fits the `votes` column; `5.0`
    /// counts as `5`. Other keys are ignored.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let Value::Object(map) = body else {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        };
        let raw = map
            .get("inc_votes")
            .ok_or_else(|| AppError::BadRequest("inc_votes is required".into()))?;
        let inc_votes = integral_i32(raw)
            .ok_or_else(|| AppError::BadRequest(format!("inc_votes must be an integer, got {}", raw)))?;
        Ok(VotePatch { inc_votes })
    }
}

fn integral_i32(value: &Value) -> Option<i32> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
        .map(|f| f as i32)
}
