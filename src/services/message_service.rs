use crate::domain::message::Message;
use crate::error::{AppError, Result};
use crate::storage::MessageStore;
use serde_json::Value;
use std::sync::Arc;

/// Number of messages returned by a listing.
pub const RECENT_LIMIT: i64 = 10;

#[derive(Clone, Debug)]
pub struct MessageService {
    store: Option<Arc<dyn MessageStore>>,
}

impl MessageService {
    /// `store` is `None` when the database could not be reached at startup.
    #[must_use]
    pub fn new(store: Option<Arc<dyn MessageStore>>) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the store, or `DatabaseUnavailable` when running without a database.
    ///
    /// # Errors
    /// Returns `AppError::DatabaseUnavailable` if no store is configured.
    pub fn store(&self) -> Result<&dyn MessageStore> {
        self.store.as_deref().ok_or(AppError::DatabaseUnavailable)
    }

    /// Stores the `message` value of a request body.
    ///
    /// # Errors
    /// Returns `AppError::DatabaseUnavailable` if no store is configured.
    /// Returns `AppError::Write` if the insert fails.
    #[tracing::instrument(level = "debug", skip(self, message))]
    pub async fn save(&self, message: &Value) -> Result<()> {
        let store = self.store()?;
        store.insert(&content_text(message)).await?;
        tracing::info!("✅ Message saved");
        Ok(())
    }

    /// Fetches the latest messages, newest first.
    ///
    /// # Errors
    /// Returns `AppError::DatabaseUnavailable` if no store is configured.
    /// Returns `AppError::Read` if the query fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn recent(&self) -> Result<Vec<Message>> {
        let messages = self.store()?.recent(RECENT_LIMIT).await?;
        tracing::debug!(count = messages.len(), "Fetched recent messages");
        Ok(messages)
    }
}

/// Text stored for a `message` value: strings verbatim, anything else as compact JSON.
#[must_use]
pub fn content_text(message: &Value) -> String {
    match message {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
