//! Domain model for the fuel-station dashboard.
//!
//! This crate provides the in-memory state the HTTP service exposes:
//! capacity-bounded tanks, stations with per-fuel prices, and the registry
//! that owns all stations. It is purely synchronous and has no knowledge of
//! HTTP; the server crate locks a registry and calls into it.
//!
//! # Modules
//!
//! - [`tank`]: capacity-bounded fluid-level accumulator
//! - [`fuel`]: the two supported fuel kinds and their wire tags
//! - [`station`]: a fuel outlet with location, two tanks, and two prices
//! - [`registry`]: the ordered collection of stations and bulk operations
//! - [`views`]: typed serialization shapes for the API boundary
//! - [`error`]: domain validation errors

pub mod error;
pub mod fuel;
pub mod registry;
pub mod station;
pub mod tank;
pub mod views;

pub use error::StationError;
pub use fuel::FuelKind;
pub use registry::StationRegistry;
pub use station::{Station, StationId};
pub use tank::Tank;
pub use views::{LevelsView, MapEntry, PriceUpdate, StationSummary};
