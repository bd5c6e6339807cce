//! HTTP route handlers.
//!
//! The service exposes a single liveness route at `/`. The cross-origin
//! policy is applied as a router-wide layer so it covers preflight responses
//! as well as the route itself, and request tracing is enabled via middleware
//! that generates a unique request ID for each incoming request.

pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{ConfigError, CACHE_CONTROL_HEALTH};
use crate::cors::cors_layer;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with the health route and middleware stack.
///
/// Unknown paths fall through to Axum's default 404 handling.
pub fn create_router(state: AppState) -> Result<Router, ConfigError> {
    let cors = cors_layer(&state.config.cors)?;

    // Health check - never cached, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Ok(Router::new()
        .merge(health_routes)
        .with_state(state)
        // CORS layer - must see every request, including preflights, before
        // any route logic
        .layer(cors)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer)))
}
