//! Error types for the allocation engine.

use thiserror::Error;

/// Errors returned by the allocation engine.
///
/// Validation happens at the boundary of each solver entry point; once a
/// solve loop has started it cannot fail. Infeasible items are never errors:
/// they are reported through result fields (`unassigned`, absent plan lines).
#[derive(Debug, Error)]
pub enum Error {
    /// An item record is malformed (non-finite size or value).
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// A compartment record or top-level argument is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested computation would exceed a configured resource ceiling.
    ///
    /// Rejected before any table allocation takes place.
    #[error("resource limit exceeded: {0}")]
    ResourceLimit(String),

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, Error>;
