//! Rays for bounding-box hit tests.

use cull_eigen::Real;
use nalgebra::{Point3, Vector3};

/// A ray defined by an origin point and a direction vector.
///
/// The direction does not need to be normalized. A zero component means the
/// ray runs parallel to that axis.
///
/// # Example
///
/// ```
/// use cull_bounds::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::<f64>::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
/// let point = ray.point_at(5.0);
/// assert!((point.x - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray<T: Real> {
    /// The origin of the ray.
    pub origin: Point3<T>,
    /// The direction of the ray (not necessarily normalized).
    pub direction: Vector3<T>,
}

impl<T: Real> Ray<T> {
    /// Creates a new ray with the given origin and direction.
    #[must_use]
    pub const fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point `origin + t * direction`.
    #[must_use]
    pub fn point_at(&self, t: T) -> Point3<T> {
        self.origin + self.direction * t
    }

    /// Component-wise reciprocal of the direction.
    ///
    /// Zero components map to infinities of matching sign.
    #[must_use]
    pub fn inverse_direction(&self) -> Vector3<T> {
        self.direction.map(|d| T::one() / d)
    }

    /// Returns a copy with the direction normalized to unit length.
    ///
    /// A zero direction is returned unchanged.
    #[must_use]
    pub fn normalized(&self) -> Self {
        match self.direction.try_normalize(T::zero()) {
            Some(direction) => Self {
                origin: self.origin,
                direction,
            },
            None => *self,
        }
    }
}

impl<T: Real> Default for Ray<T> {
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::x())
    }
}
