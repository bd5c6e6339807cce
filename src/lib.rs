//! Pulse - a standalone health-check HTTP service.
//!
//! Serves a single liveness route (`GET /` returning `{"message":"Healthy"}`)
//! behind a permissive cross-origin policy. The production traffic for the
//! system this probes is served by a separate process; pulse only answers
//! liveness checks.

pub mod config;
pub mod cors;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
