//! Axum-based HTTP service for the fuel-station dashboard.
//!
//! Thin translation glue over the `stations` domain crate: handlers parse
//! and validate requests, take the registry mutex, call one registry
//! operation, and encode the typed result to JSON.
//!
//! # Modules
//!
//! - [`app`]: application builder and server configuration
//! - [`state`]: shared state (the registry behind its single mutex)
//! - [`error`]: HTTP error mapping for domain failures
//! - [`routes`]: route handlers (stations API, health)

pub mod app;
pub mod error;
pub mod routes;
pub mod state;

pub use app::{create_app, ServerConfig};
pub use error::{AppError, AppResult};
pub use state::ServerState;
