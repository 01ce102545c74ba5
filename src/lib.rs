//! News API: read and vote access to articles, comments, topics and users over JSON/HTTP,
//! backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use response::success_ok;
pub use routes::{api_routes, app, common_routes};
pub use service::{ArticleService, CommentService, TopicService, UserService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, run_migrations};
