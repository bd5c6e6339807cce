//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by monitoring systems, load balancers, and frontend pings to
//! verify the service is alive.

use axum::Json;
use serde::Serialize;

/// Message reported by the health endpoint.
const HEALTH_MESSAGE: &str = "Healthy";

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    message: &'static str,
}

/// Health check handler.
///
/// Returns `{"message":"Healthy"}` to indicate the service is running. This is
/// a liveness probe - it only checks that the process can respond to HTTP, so
/// it has no failure path.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE,
    })
}
