//! HTTP handlers: one per endpoint, each a thin orchestration of query-layer calls.
//! Failures are returned as `AppError` and mapped to responses in `crate::error`.

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;
pub use articles::*;
pub use comments::*;
pub use topics::*;
pub use users::*;
