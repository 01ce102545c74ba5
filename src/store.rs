//! Database bootstrap: create the database if needed, open the shared pool, apply migrations.

use crate::config::ServerConfig;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Open the single long-lived pool used by every request.
pub async fn connect(config: &ServerConfig) -> Result<PgPool, AppError> {
    if config.create_database {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Apply the embedded `migrations/` directory. Already-applied migrations are skipped.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!().run(pool).await?;
    tracing::info!("migrations applied");
    Ok(())
}

pub async fn close(pool: PgPool) {
    pool.close().await;
    tracing::info!("database pool closed");
}

/// Connect to the maintenance `postgres` database on the same server and create the target
/// database when it is missing. No-op when the URL names no database or `postgres` itself.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let Some((admin, db_name)) = maintenance_target(&opts) else {
        return Ok(());
    };
    let mut conn = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` database on the same server (credentials and TLS settings
/// kept), paired with the target database name.
fn maintenance_target(opts: &PgConnectOptions) -> Option<(PgConnectOptions, String)> {
    let db_name = opts.get_database()?.trim();
    if db_name.is_empty() || db_name == "postgres" {
        return None;
    }
    Some((opts.clone().database("postgres"), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
