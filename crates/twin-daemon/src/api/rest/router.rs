//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use crate::error::{DaemonError, DaemonResult};
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
///
/// `/api/iot/anomalies` is kept as an alias of `/api/iot/data/anomalies`;
/// existing dashboard builds call either.
pub fn create_router(state: AppState, server: &ServerConfig) -> DaemonResult<Router> {
    let api_routes = Router::new()
        .route("/data", get(handlers::get_history))
        .route("/data/latest", get(handlers::get_latest))
        .route("/data/anomalies", get(handlers::get_anomalies))
        .route("/anomalies", get(handlers::get_anomalies))
        .route("/status", get(handlers::get_device_status));

    let mut app = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/iot", api_routes)
        .layer(TraceLayer::new_for_http());

    if server.enable_cors {
        app = app.layer(cors_layer(server)?);
    }

    Ok(app.with_state(state))
}

fn cors_layer(server: &ServerConfig) -> DaemonResult<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &server.cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|e| DaemonError::Config(format!("Invalid CORS origin: {}", e)))?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryTelemetry, TelemetryStorage};
    use crate::telemetry::TwoBandSampler;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::Arc;
    use tower::ServiceExt;
    use twin_types::Reading;

    fn test_state() -> AppState {
        let sampler = TwoBandSampler::with_rng(StdRng::seed_from_u64(42));
        AppState::new(Arc::new(InMemoryTelemetry::with_sampler(sampler)))
    }

    fn test_router(state: AppState) -> Router {
        create_router(state, &ServerConfig::default()).unwrap()
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_data_seeds_and_returns_history() {
        let (status, body) = get_json(test_router(test_state()), "/api/iot/data").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_records"], 1);

        let first = &body["data"][0];
        assert!(first["temperatura_celsius"].is_number());
        assert!(first["frecuencia_cardiaca_lpm"].is_u64());
        assert!(first["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_get_latest_returns_one_reading() {
        let (status, body) = get_json(test_router(test_state()), "/api/iot/data/latest").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"]["temperatura_celsius"].is_number());
    }

    #[tokio::test]
    async fn test_get_latest_appends_to_history() {
        let state = test_state();

        let (_, _) = get_json(test_router(state.clone()), "/api/iot/data/latest").await;
        let (_, _) = get_json(test_router(state.clone()), "/api/iot/data/latest").await;
        let (_, body) = get_json(test_router(state), "/api/iot/data").await;

        assert_eq!(body["total_records"], 2);
    }

    #[tokio::test]
    async fn test_get_anomalies_reports_known_violations() {
        let state = test_state();
        state
            .storage
            .append(Reading::new("2025-08-30T12:00:00", 40.5, 150))
            .await
            .unwrap();

        let (status, body) = get_json(test_router(state), "/api/iot/data/anomalies").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_anomalies"], 2);
        assert_eq!(body["anomalies"][0]["type"], "Temperatura");
        assert_eq!(body["anomalies"][0]["subtype"], "Fiebre");
        assert_eq!(body["anomalies"][1]["type"], "Frecuencia Cardíaca");
        assert_eq!(body["anomalies"][1]["subtype"], "Taquicardia");
    }

    #[tokio::test]
    async fn test_anomalies_alias_matches_canonical_route() {
        let state = test_state();
        state
            .storage
            .append(Reading::new("2025-08-30T12:00:00", 38.0, 125))
            .await
            .unwrap();

        let (_, canonical) =
            get_json(test_router(state.clone()), "/api/iot/data/anomalies").await;
        let (_, alias) = get_json(test_router(state), "/api/iot/anomalies").await;

        assert_eq!(canonical, alias);
    }

    #[tokio::test]
    async fn test_get_status_returns_simulated_device() {
        let (status, body) = get_json(test_router(test_state()), "/api/iot/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["device_status"]["battery_level"], 85);
        assert_eq!(body["device_status"]["device_id"], "IOT_ANIMAL_001");
        assert_eq!(body["device_status"]["online"], true);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = get_json(test_router(test_state()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_invalid_cors_origin_is_rejected() {
        let server = ServerConfig {
            cors_origin: Some("not a header\nvalue".to_string()),
            ..Default::default()
        };

        assert!(create_router(test_state(), &server).is_err());
    }

    #[tokio::test]
    async fn test_cors_can_be_disabled() {
        let server = ServerConfig {
            enable_cors: false,
            ..Default::default()
        };

        let app = create_router(test_state(), &server).unwrap();
        let (status, _) = get_json(app, "/api/iot/status").await;
        assert_eq!(status, StatusCode::OK);
    }
}
