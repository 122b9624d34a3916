//! Health check endpoint for moviestore

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `available` when the process can answer
    pub status: String,
    /// Deployment details
    pub system_info: SystemInfo,
}

/// Deployment details reported by the health check
#[derive(Debug, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Environment name from configuration
    pub environment: String,
    /// Crate version
    pub version: String,
}

/// Liveness check
///
/// # Example
/// ```text
/// GET /v1/healthcheck
/// ```
pub async fn healthcheck_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "available".to_string(),
        system_info: SystemInfo {
            environment: state.config.server.environment.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
