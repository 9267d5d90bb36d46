use crate::api::AppState;
use crate::api::schemas::health::HealthResponse;
use axum::{Json, extract::State};

/// Always 200. Reports the database as connected if the pool was opened at startup.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.health_service.report().into())
}
