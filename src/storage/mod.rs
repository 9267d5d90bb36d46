use crate::config::DatabaseConfig;
use crate::domain::message::Message;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub mod message_repo;
pub mod records;

pub use message_repo::MessageRepository;

pub type DbPool = Pool<Postgres>;

const CREATE_MESSAGES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS messages (
        id SERIAL PRIMARY KEY,
        content TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT NOW()
    )
";

/// Storage access used by the request handlers.
#[async_trait]
pub trait MessageStore: Send + Sync + std::fmt::Debug {
    /// Persists a message with the given content.
    ///
    /// # Errors
    /// Returns `AppError::Write` if the insert fails.
    async fn insert(&self, content: &str) -> Result<()>;

    /// Returns at most `limit` messages, newest first.
    ///
    /// # Errors
    /// Returns `AppError::Read` if the query fails.
    async fn recent(&self, limit: i64) -> Result<Vec<Message>>;
}

/// Initializes the database connection pool.
///
/// # Errors
/// Returns `sqlx::Error` if the first connection cannot be established.
pub async fn init_pool(database_url: &str, config: &DatabaseConfig) -> std::result::Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(database_url)
        .await
}

/// Opens the pool once at startup. Never retried: a missing URL or a failed
/// connection leaves the service running without a database.
pub async fn connect(database_url: Option<&str>, config: &DatabaseConfig) -> Option<DbPool> {
    let Some(url) = database_url else {
        tracing::error!("❌ DATABASE_URL is not set, running without a database");
        return None;
    };

    match init_pool(url, config).await {
        Ok(pool) => {
            tracing::info!("✅ Connected to PostgreSQL");
            Some(pool)
        }
        Err(e) => {
            tracing::error!(error = %e, "❌ Failed to connect to the database");
            None
        }
    }
}

/// Creates the `messages` table if it does not exist yet.
///
/// # Errors
/// Returns `sqlx::Error` if the statement fails.
pub async fn ensure_schema(pool: &DbPool) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(CREATE_MESSAGES_TABLE).execute(pool).await?;
    Ok(())
}

/// Runs the schema bootstrap and logs the outcome. A failure leaves the pool in place.
pub async fn bootstrap(pool: &DbPool) {
    match ensure_schema(pool).await {
        Ok(()) => tracing::info!("✅ Table 'messages' is ready"),
        Err(e) => tracing::error!(error = %e, "❌ Failed to create table 'messages'"),
    }
}
