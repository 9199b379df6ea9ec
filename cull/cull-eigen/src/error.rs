//! Error types for eigen-decomposition.

use thiserror::Error;

/// Errors reported by the checked decomposition entry points.
///
/// The unchecked entry points never fail; they accept any input and
/// propagate degenerate or non-finite values instead.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum EigenError {
    /// The point set was empty.
    #[error("point set is empty")]
    EmptyPointSet,

    /// The iteration cap was zero.
    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    /// The convergence tolerance was not a positive finite number.
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

/// Result type for checked solver operations.
pub type SolverResult<T> = std::result::Result<T, EigenError>;
