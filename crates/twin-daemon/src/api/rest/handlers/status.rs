//! Device status and daemon health handlers

use crate::api::rest::state::AppState;
use crate::telemetry;
use axum::{extract::State, Json};
use serde::Serialize;
use twin_types::DeviceStatus;

/// Device status response
#[derive(Debug, Serialize)]
pub struct DeviceStatusResponse {
    pub success: bool,
    pub device_status: DeviceStatus,
}

/// Get the simulated device status
pub async fn get_device_status() -> Json<DeviceStatusResponse> {
    Json(DeviceStatusResponse {
        success: true,
        device_status: telemetry::device_status(),
    })
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
    })
}
