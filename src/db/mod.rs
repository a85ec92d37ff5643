pub mod repository;

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::AppConfig;

pub use repository::{CourseStore, SqliteCourseStore, QUERY_TIMEOUT};

pub type Db = SqlitePool;

pub const MAX_CONNECTIONS: u32 = 10;
pub const MAX_LIFETIME: Duration = Duration::from_secs(3 * 60);
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

pub async fn connect(config: &AppConfig) -> Result<Db, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Idle connections are drawn from the open ones, so MAX_CONNECTIONS caps
    // them as well.
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .max_lifetime(MAX_LIFETIME)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    info!(
        "connected to {} (max {} connections, lifetime {:?})",
        config.database_url, MAX_CONNECTIONS, MAX_LIFETIME
    );
    Ok(pool)
}

/// Single-connection pool over a private in-memory database. Every SQLite
/// `:memory:` connection is its own database, so the one connection is never
/// recycled.
pub async fn connect_in_memory() -> Result<Db, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
        .await
}

pub async fn migrate(db: &Db) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(db).await
}
