//! Shape abstraction shared by the plane and frustum tests.

use cull_eigen::Real;
use nalgebra::{Point3, Vector3};

use crate::aabb::Aabb;
use crate::obb::Obb;

/// A box that can be tested against a plane.
///
/// A plane test needs only the box center and the box's extent projected
/// onto the plane normal.
pub trait BoundingVolume<T: Real> {
    /// World-space center.
    fn center(&self) -> Point3<T>;

    /// Half-length of the box's shadow on the line through its center along
    /// `direction`, scaled by the length of `direction`.
    fn projected_radius(&self, direction: &Vector3<T>) -> T;

    /// Whether the volume covers all of space.
    fn is_universal(&self) -> bool;
}

impl<T: Real> BoundingVolume<T> for Aabb<T> {
    fn center(&self) -> Point3<T> {
        Aabb::center(self)
    }

    fn projected_radius(&self, direction: &Vector3<T>) -> T {
        direction.abs().dot(&self.half_extents())
    }

    fn is_universal(&self) -> bool {
        Aabb::is_universal(self)
    }
}

impl<T: Real> BoundingVolume<T> for Obb<T> {
    fn center(&self) -> Point3<T> {
        Obb::center(self)
    }

    fn projected_radius(&self, direction: &Vector3<T>) -> T {
        let h = self.half_extents();
        self.axes
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, axis)| acc + direction.dot(axis).abs() * h[i])
    }

    fn is_universal(&self) -> bool {
        Obb::is_universal(self)
    }
}
