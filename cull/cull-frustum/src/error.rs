//! Error types for projection construction and frustum corners.

use thiserror::Error;

/// Errors that can occur when building a projection or resolving corners.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProjectionError {
    /// Vertical field of view outside `(0, π]`.
    #[error("field of view must be in (0, pi], got {0}")]
    InvalidFieldOfView(f64),

    /// Aspect ratio not strictly positive.
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f64),

    /// Near/far distances out of order or not positive.
    #[error("invalid depth range: near = {near}, far = {far}")]
    InvalidDepthRange {
        /// Near clip distance.
        near: f64,
        /// Far clip distance.
        far: f64,
    },

    /// Left equals right or bottom equals top.
    #[error("degenerate view extents: {width} x {height}")]
    DegenerateExtents {
        /// `right - left`.
        width: f64,
        /// `top - bottom`.
        height: f64,
    },

    /// The projection matrix has no inverse.
    #[error("projection matrix is singular")]
    Singular,
}

/// Result type for projection operations.
pub type ProjectionResult<T> = std::result::Result<T, ProjectionError>;
