//! Bounding-volume fitting and visibility culling for 3D renderers.
//!
//! This umbrella crate re-exports the cull-* crates, providing a unified API
//! for fitting bounding volumes to point sets and testing them against
//! planes and view frustums. All crates are Layer 0 (zero Bevy dependencies)
//! and can be used in renderers, physics engines, CLI tools or servers.
//!
//! # Quick Start
//!
//! ```
//! use cull::prelude::*;
//!
//! // Fit an oriented box to a point cloud
//! let points = [
//!     Point3::new(90.0, 60.0, 90.0),
//!     Point3::new(90.0, 90.0, 30.0),
//!     Point3::new(60.0, 60.0, 60.0),
//!     Point3::new(60.0, 60.0, 90.0),
//!     Point3::new(30.0, 30.0, 30.0),
//! ];
//! let obb = Obb::from_points(&points);
//!
//! // Build a camera frustum and cull against it
//! let projection = perspective_fov_lh(std::f64::consts::FRAC_PI_2, 1.0, 1.0, 500.0).unwrap();
//! let frustum = Frustum::from_projection(&projection);
//! assert!(frustum.contains_or_intersects(&obb));
//! assert!(obb.to_aabb().inside_or_intersecting_frustum(&frustum));
//! ```
//!
//! # Module Organization
//!
//! - [`eigen`] - Centroid, covariance and symmetric 3×3 Jacobi eigen solver
//! - [`bounds`] - `Aabb`, `Obb`, `Ray` and the `BoundingVolume` trait
//! - [`frustum`] - `Plane`, `Frustum`, clip depth and projection builders
//!
//! # Precision
//!
//! Every type is generic over [`eigen::Real`], implemented for `f32` and
//! `f64`. The `f`/`d` suffixed aliases (`Aabbf`, `Obbd`, `Frustumf`, ...)
//! name the concrete variants.
//!
//! # Feature Flags
//!
//! - `serde` - Serialize and deserialize every value type

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![doc(html_root_url = "https://docs.rs/cull/0.3.0")]

// =============================================================================
// Re-exports
// =============================================================================

/// Centroid, covariance and symmetric eigen-decomposition.
pub use cull_eigen as eigen;

/// Axis-aligned and oriented bounding boxes.
pub use cull_bounds as bounds;

/// Planes, frustums and projection builders.
pub use cull_frustum as frustum;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for bounding and culling.
///
/// # Usage
///
/// ```
/// use cull::prelude::*;
/// ```
pub mod prelude {
    // Eigen solver
    pub use cull_eigen::{EigenParams, EigenResult, Real, decompose_points, decompose_symmetric};

    // Bounding volumes
    pub use cull_bounds::{Aabb, BoundingVolume, Obb, Ray};

    // Planes and frustums
    pub use cull_frustum::{
        ClipDepth, Cullable, Frustum, Plane, orthographic_off_center_lh, perspective_fov_lh,
        perspective_off_center_lh,
    };

    // Math types
    pub use cull_eigen::{Matrix3, Point3, Vector3};
    pub use cull_frustum::Matrix4;
}

// =============================================================================
// Tests
// =============================================================================
