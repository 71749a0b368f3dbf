//! Shared server state.
//!
//! The station registry is the single shared mutable resource. It sits
//! behind one coarse mutex guarding the whole registry for the duration of
//! a single API call: a reader never observes a station mid-update, and
//! concurrent bulk updates serialise rather than interleave. The lock is
//! scoped strictly to the in-memory operation, never held across I/O.

use std::sync::Arc;
use std::time::Instant;

use stations::StationRegistry;
use tokio::sync::Mutex;

/// Shared state for all route handlers.
///
/// Cloned into each handler via axum's `State` extractor. Tests build their
/// own state from a fresh registry instead of touching ambient globals.
#[derive(Clone)]
pub struct ServerState {
    /// The registry behind its single coarse mutex.
    pub registry: Arc<Mutex<StationRegistry>>,

    /// Server start time.
    pub start_time: Instant,
}

impl ServerState {
    /// Create state owning the given registry.
    pub fn new(registry: StationRegistry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
