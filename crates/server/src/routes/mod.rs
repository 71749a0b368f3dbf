//! HTTP route handlers.
//!
//! - [`stations`]: the `/api/distributori` endpoints
//! - [`health`]: liveness probe

pub mod health;
pub mod stations;
