//! Error types for bounding-volume construction.

use cull_eigen::EigenError;
use thiserror::Error;

/// Errors reported by the checked constructors.
///
/// The unchecked constructors never fail; they fall back to the universal
/// box instead.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum BoundsError {
    /// The point set was empty.
    #[error("cannot bound an empty point set")]
    EmptyPointSet,

    /// The eigen solver parameters were rejected.
    #[error("invalid fitting parameters: {0}")]
    Eigen(#[from] EigenError),
}

/// Result type for checked bounding-volume construction.
pub type BoundsResult<T> = std::result::Result<T, BoundsError>;
