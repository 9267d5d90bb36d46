use crate::services::health_service::HealthReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub service: String,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: report.status.to_string(),
            database: report.database.to_string(),
            service: report.service.to_string(),
        }
    }
}
