//! Domain validation errors.
//!
//! Every mutation validates at the point of violation and propagates a
//! `StationError`; the server crate maps these to HTTP status codes.

/// Validation failures raised by domain mutations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationError {
    /// A negative quantity or price was supplied, or a seed violated an
    /// invariant (duplicate station id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A withdrawal exceeded the current tank level. Not reachable from the
    /// HTTP surface, but enforced by [`crate::Tank`] for internal correctness.
    #[error("insufficient level: requested {requested}, available {available}")]
    InsufficientLevel { requested: f64, available: f64 },

    /// A fuel tag outside `benzina`/`diesel` was parsed.
    #[error("unknown fuel kind: {0:?}")]
    UnknownFuelKind(String),
}
