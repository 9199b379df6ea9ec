//! Symmetric 3×3 eigen-decomposition for bounding-volume fitting.
//!
//! This crate computes the principal axes of a point cloud: the centroid, the
//! covariance matrix, and its eigenvalues and eigenvectors. The eigenvectors
//! are the axes an oriented bounding box is fitted along.
//!
//! # Features
//!
//! - **Jacobi solver**: largest-pivot plane rotations until the off-diagonal
//!   mass is below a precision-dependent tolerance, bounded by an iteration cap
//! - **Both precisions**: every function is generic over [`Real`], implemented
//!   for `f32` and `f64`
//! - **Total**: degenerate matrices give zero eigenvalues and an orthonormal
//!   basis; non-finite input propagates instead of panicking
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - Renderers and culling passes
//! - Physics broad phases
//! - CLI tools and servers
//!
//! # Example
//!
//! ```
//! use cull_eigen::{EigenParams, decompose_points};
//! use nalgebra::Point3;
//!
//! let points = [
//!     Point3::<f64>::new(90.0, 60.0, 90.0),
//!     Point3::new(90.0, 90.0, 30.0),
//!     Point3::new(60.0, 60.0, 60.0),
//!     Point3::new(60.0, 60.0, 90.0),
//!     Point3::new(30.0, 30.0, 30.0),
//! ];
//!
//! let fit = decompose_points(&points, &EigenParams::default());
//! assert!(fit.eigen.converged);
//! assert!((fit.eigen.values[0] - 910.07).abs() < 0.01);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod covariance;
mod error;
mod jacobi;
mod params;
mod real;
mod result;

pub use covariance::{centroid, covariance_matrix};
pub use error::{EigenError, SolverResult};
pub use jacobi::{
    decompose_points, decompose_points_checked, decompose_symmetric, decompose_symmetric_checked,
};
pub use params::{CovarianceScale, EigenParams};
pub use real::Real;
pub use result::{EigenResult, PointEigen};

/// Single-precision eigen result.
pub type EigenResultf = EigenResult<f32>;

/// Double-precision eigen result.
pub type EigenResultd = EigenResult<f64>;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
