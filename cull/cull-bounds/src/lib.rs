//! Axis-aligned and oriented bounding boxes.
//!
//! This crate provides the bounding volumes a culling pass tests against
//! planes and frustums:
//!
//! - [`Aabb`]: min/max box with union, affine/projective transform and a
//!   boundary-inclusive ray slab test
//! - [`Obb`]: box fitted along the principal axes of a point cloud
//! - [`Ray`]: origin plus direction for hit tests
//! - [`BoundingVolume`]: center and projected radius, the two quantities a
//!   plane test needs
//!
//! # Degenerate input
//!
//! Construction never panics. A point set with a NaN or infinite component
//! produces the *universal* box (`-∞..+∞` on every axis), so corrupted
//! geometry is always treated as visible rather than silently shrunk away.
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
//! use cull_bounds::{Aabb, Obb, Ray};
//! use nalgebra::{Point3, Vector3};
//!
//! let points = [
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(3.0, 2.0, 0.5),
//!     Point3::new(2.0, 4.0, 1.0),
//! ];
//!
//! let aabb = Aabb::from_points(&points);
//! let ray = Ray::new(Point3::new(-5.0, 1.0, 0.5), Vector3::x());
//! assert!(aabb.intersect_ray(&ray));
//!
//! let obb = Obb::from_points(&points);
//! assert!(points.iter().all(|p| obb.contains(p)));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod aabb;
mod error;
mod obb;
mod projective;
mod ray;
mod volume;

pub use aabb::Aabb;
pub use error::{BoundsError, BoundsResult};
pub use obb::Obb;
pub use projective::project_point;
pub use ray::Ray;
pub use volume::BoundingVolume;

/// Single-precision AABB.
pub type Aabbf = Aabb<f32>;
/// Double-precision AABB.
pub type Aabbd = Aabb<f64>;

/// Single-precision OBB.
pub type Obbf = Obb<f32>;
/// Double-precision OBB.
pub type Obbd = Obb<f64>;

/// Single-precision ray.
pub type Rayf = Ray<f32>;
/// Double-precision ray.
pub type Rayd = Ray<f64>;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};
