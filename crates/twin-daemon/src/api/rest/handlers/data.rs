//! Telemetry data handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{extract::State, Json};
use serde::Serialize;
use twin_types::Reading;

/// Full history response
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub data: Vec<Reading>,
    pub total_records: usize,
}

/// Get the full telemetry history, oldest-first
///
/// An empty buffer is seeded with one reading before responding, so the
/// data array is never empty.
pub async fn get_history(State(state): State<AppState>) -> ApiResult<Json<HistoryResponse>> {
    let data = state.storage.history().await?;

    Ok(Json(HistoryResponse {
        success: true,
        total_records: data.len(),
        data,
    }))
}

/// Latest reading response
#[derive(Debug, Serialize)]
pub struct LatestResponse {
    pub success: bool,
    pub data: Reading,
}

/// Generate a fresh reading, append it to history, and return it
///
/// This is a write: each call grows history (subject to FIFO eviction),
/// it does not peek at the tail.
pub async fn get_latest(State(state): State<AppState>) -> ApiResult<Json<LatestResponse>> {
    let reading = state.storage.record_latest().await?;

    Ok(Json(LatestResponse {
        success: true,
        data: reading,
    }))
}
