//! Box-side view of the plane and frustum tests.

use cull_bounds::BoundingVolume;
use cull_eigen::Real;

use crate::frustum::Frustum;
use crate::plane::Plane;

/// Culling tests called on the volume rather than the plane or frustum.
///
/// Implemented for every [`BoundingVolume`]; each method forwards to the
/// matching [`Plane`] or [`Frustum`] predicate.
///
/// # Example
///
/// ```
/// use cull_bounds::Aabb;
/// use cull_frustum::{Cullable, Plane};
/// use nalgebra::Point3;
///
/// let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
/// assert!(aabb.intersects_plane(&Plane::new(0.0, 1.0, 0.0, 0.5)));
/// assert!(!aabb.inside_or_intersecting_plane(&Plane::new(0.0, 1.0, 0.0, -3.0)));
/// ```
pub trait Cullable<T: Real> {
    /// See [`Plane::intersects`].
    fn intersects_plane(&self, plane: &Plane<T>) -> bool;

    /// See [`Plane::inside_or_intersecting`].
    fn inside_or_intersecting_plane(&self, plane: &Plane<T>) -> bool;

    /// See [`Frustum::contains_or_intersects`].
    fn inside_or_intersecting_frustum(&self, frustum: &Frustum<T>) -> bool;
}

impl<T: Real, V: BoundingVolume<T>> Cullable<T> for V {
    fn intersects_plane(&self, plane: &Plane<T>) -> bool {
        plane.intersects(self)
    }

    fn inside_or_intersecting_plane(&self, plane: &Plane<T>) -> bool {
        plane.inside_or_intersecting(self)
    }

    fn inside_or_intersecting_frustum(&self, frustum: &Frustum<T>) -> bool {
        frustum.contains_or_intersects(self)
    }
}
