//! Anomaly detection handler

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use crate::telemetry;
use axum::{extract::State, Json};
use serde::Serialize;
use twin_types::Anomaly;

/// Anomaly scan response
#[derive(Debug, Serialize)]
pub struct AnomaliesResponse {
    pub success: bool,
    pub anomalies: Vec<Anomaly>,
    pub total_anomalies: usize,
}

/// Run anomaly detection over the full current history
pub async fn get_anomalies(State(state): State<AppState>) -> ApiResult<Json<AnomaliesResponse>> {
    let readings = state.storage.history().await?;
    let anomalies = telemetry::detect(&readings);

    Ok(Json(AnomaliesResponse {
        success: true,
        total_anomalies: anomalies.len(),
        anomalies,
    }))
}
