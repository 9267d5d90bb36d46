use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("База данных не подключена")]
    DatabaseUnavailable,
    #[error("{0}")]
    BadRequest(String),
    #[error("Ошибка базы данных: {0}")]
    Write(#[source] sqlx::Error),
    #[error("Ошибка чтения из БД: {0}")]
    Read(#[source] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::DatabaseUnavailable => {
                tracing::error!("❌ Request rejected: database is not connected");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::BadRequest(msg) => {
                tracing::debug!(message = %msg, "Bad request");
                StatusCode::BAD_REQUEST
            }
            Self::Write(e) => {
                tracing::error!(error = %e, "❌ Failed to save message");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Read(e) => {
                tracing::error!(error = %e, "❌ Failed to read messages");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Storage errors are surfaced verbatim to keep responses compatible with existing clients.
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
