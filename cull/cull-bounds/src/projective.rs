//! Projective point transforms.

use cull_eigen::Real;
use nalgebra::{Matrix4, Point3, Vector4};

/// Applies `matrix` to `point` and divides by the resulting `w`.
///
/// Unlike [`Matrix4::transform_point`], the divide is unconditional: a point
/// on the `w = 0` plane maps to infinities (or NaN) instead of an undivided,
/// finite point.
///
/// # Example
///
/// ```
/// use cull_bounds::project_point;
/// use nalgebra::{Matrix4, Point3};
///
/// let mut m = Matrix4::<f64>::identity();
/// m[(3, 3)] = 0.0;
/// m[(3, 2)] = 1.0;
///
/// let p = project_point(&m, &Point3::new(2.0, 4.0, 2.0));
/// assert_eq!(p, Point3::new(1.0, 2.0, 1.0));
/// assert!(project_point(&m, &Point3::new(1.0, 1.0, 0.0)).x.is_infinite());
/// ```
#[must_use]
pub fn project_point<T: Real>(matrix: &Matrix4<T>, point: &Point3<T>) -> Point3<T> {
    dehomogenize(&(matrix * point.to_homogeneous()))
}

pub(crate) fn dehomogenize<T: Real>(h: &Vector4<T>) -> Point3<T> {
    Point3::new(h.x / h.w, h.y / h.w, h.z / h.w)
}
