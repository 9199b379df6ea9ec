//! Half-space planes and view frustums for visibility culling.
//!
//! This crate provides:
//!
//! - [`Plane`]: `A·x + B·y + C·z = D` with signed distance, normalization and
//!   the two box predicates a culling pass needs
//! - [`Frustum`]: six planes extracted from a projection matrix, plus its
//!   eight corners computed on demand
//! - [`Cullable`]: the same tests called from the box side
//! - Left-handed projection builders ([`perspective_fov_lh`],
//!   [`perspective_off_center_lh`], [`orthographic_off_center_lh`])
//!
//! # Sign convention
//!
//! Plane normals point *out*. A negative signed distance is inside, so a
//! frustum contains a point when every plane reports a distance `<= 0`.
//!
//! # Conservative culling
//!
//! Boxes with a non-finite center or extent (the universal box produced from
//! corrupted input) always pass the tests, so they are drawn rather than
//! dropped.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - Renderers and culling passes
//! - Shadow-map fitting
//! - CLI tools and servers
//!
//! # Example
//!
//! ```
//! use cull_bounds::Obb;
//! use cull_frustum::{Frustum, perspective_fov_lh};
//! use nalgebra::Point3;
//!
//! let projection = perspective_fov_lh(std::f64::consts::FRAC_PI_2, 1.0, 2.0, 10.0).unwrap();
//! let frustum = Frustum::from_projection(&projection).normalized();
//!
//! // Near plane at z = 2, normal pointing toward the camera
//! assert!((frustum.near.c + 1.0).abs() < 1e-12);
//! assert!((frustum.near.d + 2.0).abs() < 1e-12);
//!
//! let obb = Obb::from_points(&[
//!     Point3::new(0.0, 0.0, 5.0),
//!     Point3::new(1.0, 1.0, 6.0),
//!     Point3::new(-1.0, 0.0, 5.5),
//! ]);
//! assert!(frustum.contains_or_intersects(&obb));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cullable;
mod depth;
mod error;
mod frustum;
mod plane;
mod projection;

pub use cullable::Cullable;
pub use depth::ClipDepth;
pub use error::{ProjectionError, ProjectionResult};
pub use frustum::{Frustum, calculate_corners};
pub use plane::Plane;
pub use projection::{orthographic_off_center_lh, perspective_fov_lh, perspective_off_center_lh};

/// Single-precision plane.
pub type Planef = Plane<f32>;
/// Double-precision plane.
pub type Planed = Plane<f64>;

/// Single-precision frustum.
pub type Frustumf = Frustum<f32>;
/// Double-precision frustum.
pub type Frustumd = Frustum<f64>;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};
