//! Axis-aligned bounding box.

use std::ops::BitOr;

use cull_eigen::Real;
use nalgebra::{Matrix4, Point3, Vector3, convert};
use tracing::debug;

use crate::error::{BoundsError, BoundsResult};
use crate::projective::dehomogenize;
use crate::ray::Ray;

/// An axis-aligned bounding box (AABB).
///
/// Defined by minimum and maximum corner points. A box with `-∞` minimum and
/// `+∞` maximum on every axis is the *universal* box: it contains everything
/// and is what corrupted (non-finite) input collapses to, so that a culling
/// pass never rejects geometry it cannot bound.
///
/// # Example
///
/// ```
/// use cull_bounds::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 10.0),
/// );
///
/// assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
/// assert!(!aabb.contains(&Point3::new(15.0, 5.0, 5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<T: Real> {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<T>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<T>,
}

impl<T: Real> Aabb<T> {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are stored as given; callers are responsible for
    /// `min <= max`. If any component is NaN the universal box is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use cull_bounds::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::new(Point3::new(f64::NAN, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    /// assert!(aabb.is_universal());
    /// ```
    #[must_use]
    pub fn new(min: Point3<T>, max: Point3<T>) -> Self {
        if min.iter().chain(max.iter()).any(|v| v.is_nan_value()) {
            return Self::universal();
        }
        Self { min, max }
    }

    /// The box spanning `[-∞, +∞]` on every axis.
    #[must_use]
    pub fn universal() -> Self {
        Self {
            min: Point3::new(T::NEG_INFINITY, T::NEG_INFINITY, T::NEG_INFINITY),
            max: Point3::new(T::INFINITY, T::INFINITY, T::INFINITY),
        }
    }

    /// Create a zero-volume AABB around a single point.
    #[must_use]
    pub fn from_point(point: Point3<T>) -> Self {
        Self::new(point, point)
    }

    /// Create the tightest AABB around a point set.
    ///
    /// Returns the universal box if the set is empty or if any component of
    /// any point is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use cull_bounds::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let points = [
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(10.0, 5.0, 3.0),
    ///     Point3::new(-2.0, 8.0, 1.0),
    /// ];
    ///
    /// let aabb = Aabb::from_points(&points);
    /// assert_eq!(aabb.min, Point3::new(-2.0, 0.0, 0.0));
    /// assert_eq!(aabb.max, Point3::new(10.0, 8.0, 3.0));
    /// ```
    #[must_use]
    pub fn from_points(points: &[Point3<T>]) -> Self {
        let Some(first) = points.first() else {
            debug!("empty point set bounded by universal box");
            return Self::universal();
        };

        if points.iter().any(|p| p.iter().any(|v| !v.is_finite())) {
            debug!(
                points = points.len(),
                "non-finite point component, using universal box"
            );
            return Self::universal();
        }

        let mut aabb = Self {
            min: *first,
            max: *first,
        };
        for p in &points[1..] {
            aabb.expand_to_include(p);
        }
        aabb
    }

    /// [`Aabb::from_points`] that rejects an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::EmptyPointSet`] if `points` is empty.
    pub fn try_from_points(points: &[Point3<T>]) -> BoundsResult<Self> {
        if points.is_empty() {
            return Err(BoundsError::EmptyPointSet);
        }
        Ok(Self::from_points(points))
    }

    /// Check if this is the universal box.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        self.min.iter().all(|&v| v == T::NEG_INFINITY) && self.max.iter().all(|&v| v == T::INFINITY)
    }

    /// Get the center of the AABB, `(min + max) / 2`.
    #[must_use]
    pub fn center(&self) -> Point3<T> {
        let half: T = convert(0.5);
        Point3::from((self.min.coords + self.max.coords) * half)
    }

    /// Get the size (width, height, depth), `max - min`.
    #[must_use]
    pub fn size(&self) -> Vector3<T> {
        self.max - self.min
    }

    /// Get the half-extents, `size / 2`.
    #[must_use]
    pub fn half_extents(&self) -> Vector3<T> {
        let half: T = convert(0.5);
        self.size() * half
    }

    /// The 8 corners, ordered with z varying fastest, then y, then x.
    #[must_use]
    pub fn corners(&self) -> [Point3<T>; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Expands this AABB to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<T>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Returns the smallest AABB containing both boxes.
    ///
    /// Commutative, associative and idempotent.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Returns the smallest AABB containing this box and a point.
    #[must_use]
    pub fn union_point(&self, point: &Point3<T>) -> Self {
        let mut out = *self;
        out.expand_to_include(point);
        out
    }

    /// Bound this box after transforming it by `matrix`.
    ///
    /// All 8 corners are transformed (with perspective division) and
    /// re-aligned to the axes, so the result tightly bounds the transformed
    /// box under rotation and non-uniform scale. A non-finite box stays
    /// universal, as does a box that touches or crosses the `w = 0` plane of
    /// a projective matrix, whose image is unbounded.
    ///
    /// # Example
    ///
    /// ```
    /// use cull_bounds::Aabb;
    /// use nalgebra::{Matrix4, Point3, Vector3};
    ///
    /// let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    /// let rotated = aabb.transformed(&Matrix4::from_scaled_axis(
    ///     Vector3::z() * std::f64::consts::FRAC_PI_4,
    /// ));
    ///
    /// let r = 2.0_f64.sqrt();
    /// assert!((rotated.max.x - r).abs() < 1e-12);
    /// assert!((rotated.max.z - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4<T>) -> Self {
        if !self.is_finite() {
            return Self::universal();
        }

        let clip = self.corners().map(|c| matrix * c.to_homogeneous());
        let ahead = clip.iter().all(|h| h.w > T::zero());
        let behind = clip.iter().all(|h| h.w < T::zero());
        if !(ahead || behind) {
            debug!("box meets the w = 0 plane, using universal bounds");
            return Self::universal();
        }

        Self::from_points(&clip.map(|h| dehomogenize(&h)))
    }

    /// Checks if this AABB overlaps another. Touching faces count.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Checks if a point is inside the AABB.
    ///
    /// Points on the boundary are considered inside.
    #[must_use]
    pub fn contains(&self, point: &Point3<T>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// The point of the box closest to `point`.
    ///
    /// Points inside the box are returned unchanged.
    #[must_use]
    pub fn closest_point(&self, point: &Point3<T>) -> Point3<T> {
        point.sup(&self.min).inf(&self.max)
    }

    /// Parametric distance at which `ray` enters the box.
    ///
    /// Slab test over the three axis pairs. Returns `Some(0)` when the origin
    /// is inside. All comparisons are inclusive: a ray running exactly along a
    /// face or edge enters the box. An axis the ray is parallel to is decided
    /// by whether the origin lies within that slab.
    #[must_use]
    pub fn ray_entry(&self, ray: &Ray<T>) -> Option<T> {
        if self.contains(&ray.origin) {
            return Some(T::zero());
        }

        let mut t_enter = T::zero();
        let mut t_exit = T::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];

            if direction == T::zero() {
                if origin < self.min[axis] || origin > self.max[axis] {
                    return None;
                }
                continue;
            }

            let inv = T::one() / direction;
            let mut t1 = (self.min[axis] - origin) * inv;
            let mut t2 = (self.max[axis] - origin) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }

            t_enter = t_enter.max(t1);
            t_exit = t_exit.min(t2);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }

    /// Checks if `ray` starts in or hits the box.
    ///
    /// # Example
    ///
    /// ```
    /// use cull_bounds::{Aabb, Ray};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    ///
    /// // Grazing the x = 0 face still counts
    /// let ray = Ray::new(Point3::new(0.0, 0.5, -5.0), Vector3::z());
    /// assert!(aabb.intersect_ray(&ray));
    ///
    /// let miss = Ray::new(Point3::new(2.0, 0.5, -5.0), Vector3::z());
    /// assert!(!aabb.intersect_ray(&miss));
    /// ```
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray<T>) -> bool {
        self.ray_entry(ray).is_some()
    }

    fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|v| v.is_finite())
    }
}

impl<T: Real> BitOr for Aabb<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(&rhs)
    }
}

impl<T: Real> BitOr<Point3<T>> for Aabb<T> {
    type Output = Self;

    fn bitor(self, rhs: Point3<T>) -> Self {
        self.union_point(&rhs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb<f64> {
        Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_new_stores_as_given() {
        let aabb = Aabb::new(Point3::new(3.0, 2.0, 1.0), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.min, Point3::new(3.0, 2.0, 1.0));
        assert_eq!(aabb.max, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_all_nan_corners_are_universal() {
        let nan = Point3::new(f32::NAN, f32::NAN, f32::NAN);
        let aabb = Aabb::new(nan, nan);
        assert!(aabb.is_universal());
        assert_eq!(aabb.min, Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY));
        assert_eq!(aabb.max, Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY));
    }

    #[test]
    fn test_from_points_with_nan_is_universal() {
        let points = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(f64::NAN, 0.0, 0.0),
            Point3::new(-1.0, 5.0, 0.0),
        ];
        assert!(Aabb::from_points(&points).is_universal());
    }

    #[test]
    fn test_from_points_with_infinity_is_universal() {
        let points = [Point3::new(1.0, f64::INFINITY, 3.0), Point3::origin()];
        assert!(Aabb::from_points(&points).is_universal());
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb::<f64>::from_points(&[]).is_universal());
        assert_eq!(
            Aabb::<f64>::try_from_points(&[]),
            Err(BoundsError::EmptyPointSet)
        );
    }

    #[test]
    fn test_from_single_point_has_zero_size() {
        let p = Point3::new(4.0, -2.0, 7.5);
        let aabb = Aabb::from_points(&[p]);
        assert_eq!(aabb.min, p);
        assert_eq!(aabb.max, p);
        assert_eq!(aabb.size(), Vector3::zeros());
    }

    #[test]
    fn test_center_and_size() {
        let aabb = Aabb::new(Point3::new(-2.0, 0.0, 4.0), Point3::new(2.0, 6.0, 5.0));
        assert_eq!(aabb.center(), Point3::new(0.0, 3.0, 4.5));
        assert_eq!(aabb.size(), Vector3::new(4.0, 6.0, 1.0));
        assert_eq!(aabb.half_extents(), Vector3::new(2.0, 3.0, 0.5));
    }

    #[test]
    fn test_union() {
        let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(0.5, 3.0, 0.75));
        let u = a.union(&b);
        assert_eq!(u.min, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(u.max, Point3::new(1.0, 3.0, 1.0));
        assert_eq!(a | b, u);
        assert_eq!(b | a, u);
    }

    #[test]
    fn test_union_idempotent() {
        let a = unit_box();
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn test_union_point() {
        let a = unit_box() | Point3::new(2.0, -1.0, 0.5);
        assert_eq!(a.min, Point3::new(0.0, -1.0, 0.0));
        assert_eq!(a.max, Point3::new(2.0, 1.0, 1.0));
    }

    #[test]
    fn test_transform_identity() {
        let a = Aabb::new(Point3::new(-3.0, 1.0, 2.0), Point3::new(4.0, 2.5, 9.0));
        assert_eq!(a.transformed(&Matrix4::identity()), a);
    }

    #[test]
    fn test_transform_translation_and_scale() {
        let m = Matrix4::new_translation(&Vector3::new(10.0, 0.0, -1.0))
            * Matrix4::new_nonuniform_scaling(&Vector3::new(2.0, 3.0, -1.0));
        let t = unit_box().transformed(&m);
        assert_relative_eq!(t.min, Point3::new(10.0, 0.0, -2.0));
        assert_relative_eq!(t.max, Point3::new(12.0, 3.0, -1.0));
    }

    #[test]
    fn test_transform_rotation_bounds_corners() {
        let m = Matrix4::from_scaled_axis(Vector3::y() * std::f64::consts::FRAC_PI_2);
        let t = unit_box().transformed(&m);
        // Rotating +90° about y maps x -> -z and z -> x
        assert_relative_eq!(t.min, Point3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(t.max, Point3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    // Left-handed perspective: 90° fov, aspect 1, near 2, far 10
    fn perspective() -> Matrix4<f64> {
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.5, -5.0, //
            0.0, 0.0, 1.0, 0.0,
        )
    }

    #[test]
    fn test_transform_box_on_camera_plane_is_universal() {
        let a = Aabb::new(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 4.0));
        let t = a.transformed(&perspective());
        assert!(t.is_universal());

        let inner = crate::project_point(&perspective(), &Point3::new(1.0, 1.0, 1e-6));
        assert!(t.contains(&inner));
    }

    #[test]
    fn test_transform_box_crossing_camera_plane_is_universal() {
        let a = Aabb::new(Point3::new(-1.0, -1.0, -3.0), Point3::new(1.0, 1.0, 4.0));
        assert!(a.transformed(&perspective()).is_universal());
    }

    #[test]
    fn test_transform_box_in_front_of_camera_divides() {
        let a = Aabb::new(Point3::new(-1.0, -1.0, 2.0), Point3::new(1.0, 1.0, 4.0));
        let t = a.transformed(&perspective());
        assert_relative_eq!(t.min, Point3::new(-0.5, -0.5, -1.0), epsilon = 1e-12);
        assert_relative_eq!(t.max, Point3::new(0.5, 0.5, 0.25), epsilon = 1e-12);

        for z in [2.0, 2.5, 3.0, 4.0] {
            let p = crate::project_point(&perspective(), &Point3::new(0.9, -0.9, z));
            assert!(t.contains(&p));
        }
    }

    #[test]
    fn test_transform_universal_stays_universal() {
        let m = Matrix4::new_scaling(2.0);
        assert!(Aabb::<f64>::universal().transformed(&m).is_universal());
    }

    #[test]
    fn test_intersects() {
        let a = unit_box();
        let touching = Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
        let apart = Aabb::new(Point3::new(1.5, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_closest_point() {
        let a = unit_box();
        assert_eq!(
            a.closest_point(&Point3::new(2.0, 0.5, -3.0)),
            Point3::new(1.0, 0.5, 0.0)
        );
        let inside = Point3::new(0.25, 0.5, 0.75);
        assert_eq!(a.closest_point(&inside), inside);
    }

    #[test]
    fn test_ray_hits_from_outside() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vector3::x());
        assert_relative_eq!(unit_box().ray_entry(&ray).unwrap(), 5.0);
    }

    #[test]
    fn test_ray_origin_inside() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.5), Vector3::new(-1.0, 2.0, 0.0));
        assert_eq!(unit_box().ray_entry(&ray), Some(0.0));
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), -Vector3::x());
        assert!(!unit_box().intersect_ray(&ray));
    }

    #[test]
    fn test_ray_along_face_intersects() {
        // Travels in the plane y = 1 (top face), parallel to x
        let ray = Ray::new(Point3::new(-3.0, 1.0, 0.5), Vector3::x());
        assert!(unit_box().intersect_ray(&ray));

        // Travels in the plane x = 0, parallel to z
        let ray = Ray::new(Point3::new(0.0, 0.5, 10.0), -Vector3::z());
        assert!(unit_box().intersect_ray(&ray));
    }

    #[test]
    fn test_ray_along_edge_intersects() {
        let ray = Ray::new(Point3::new(1.0, 1.0, -4.0), Vector3::z());
        assert!(unit_box().intersect_ray(&ray));
    }

    #[test]
    fn test_ray_parallel_outside_slab_misses() {
        let ray = Ray::new(Point3::new(-3.0, 1.0 + 1e-9, 0.5), Vector3::x());
        assert!(!unit_box().intersect_ray(&ray));
    }

    #[test]
    fn test_ray_diagonal_through_corner() {
        let ray = Ray::new(Point3::new(2.0, 2.0, 2.0), Vector3::new(-1.0, -1.0, -1.0));
        assert_relative_eq!(unit_box().ray_entry(&ray).unwrap(), 1.0);
    }

    #[test]
    fn test_universal_box_contains_everything() {
        let u = Aabb::<f32>::universal();
        assert!(u.contains(&Point3::new(1e30, -1e30, 0.0)));
        let ray = Ray::new(Point3::new(1e20, 0.0, 0.0), Vector3::y());
        assert!(u.intersect_ray(&ray));
    }
}
