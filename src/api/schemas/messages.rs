use crate::domain::message::Message;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SAVED_MESSAGE: &str = "Сообщение сохранено в базу";
pub const MISSING_MESSAGE_FIELD: &str = "Нужен JSON с полем 'message'";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveMessageRequest {
    pub message: Value,
}

impl SaveMessageRequest {
    /// Extracts `message` from a raw JSON body. A `null` value counts as missing.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` if the body is not JSON or has no usable `message`.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let data: Value =
            serde_json::from_slice(body).map_err(|_| AppError::BadRequest(MISSING_MESSAGE_FIELD.to_string()))?;

        match data.get("message") {
            // `null` is treated like a missing field: a 400 instead of a NOT NULL violation on insert.
            Some(message) if !message.is_null() => Ok(Self { message: message.clone() }),
            _ => Err(AppError::BadRequest(MISSING_MESSAGE_FIELD.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveMessageResponse {
    pub status: String,
    pub message: String,
    pub your_message: Value,
}

impl SaveMessageResponse {
    #[must_use]
    pub fn saved(your_message: Value) -> Self {
        Self { status: "success".to_string(), message: SAVED_MESSAGE.to_string(), your_message }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageView {
    pub id: i32,
    pub text: String,
    pub time: String,
}

impl From<Message> for MessageView {
    fn from(message: Message) -> Self {
        let time = message.time_string();
        Self { id: message.id, text: message.content, time }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageListResponse {
    pub total: usize,
    pub messages: Vec<MessageView>,
}

impl From<Vec<Message>> for MessageListResponse {
    fn from(messages: Vec<Message>) -> Self {
        let messages: Vec<MessageView> = messages.into_iter().map(Into::into).collect();
        Self { total: messages.len(), messages }
    }
}
