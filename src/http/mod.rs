//! HTTP server module.
//!
//! Plain-HTTP server startup with graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
