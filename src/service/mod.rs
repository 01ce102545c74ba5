//! Query layer: one function per data-access operation, plus request validation.

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;
pub mod validation;

pub use articles::ArticleService;
pub use comments::CommentService;
pub use topics::TopicService;
pub use users::UserService;
pub use validation::{parse_article_id, VotePatch};
