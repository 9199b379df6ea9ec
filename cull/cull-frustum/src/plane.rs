//! Half-space planes and their box tests.

use std::ops::{Mul, Neg};

use approx::{AbsDiffEq, RelativeEq};
use cull_bounds::BoundingVolume;
use cull_eigen::Real;
use nalgebra::{Point3, Vector3, convert};

/// A plane `A·x + B·y + C·z = D` dividing space into two half-spaces.
///
/// The normal `(A, B, C)` need not be unit length. It points to the *outer*
/// half-space: points on the side the normal points to have a positive
/// signed distance, points behind it (inside) a negative one.
///
/// # Example
///
/// ```
/// use cull_frustum::Plane;
/// use nalgebra::Point3;
///
/// let plane = Plane::new(1.0, 0.0, 0.0, 5.0);
/// assert_eq!(plane.signed_distance(&Point3::new(0.0, 1.0, 0.0)), -5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T: Real> {
    /// The A coefficient (normal x).
    pub a: T,
    /// The B coefficient (normal y).
    pub b: T,
    /// The C coefficient (normal z).
    pub c: T,
    /// The D coefficient (offset along the normal, scaled by its length).
    pub d: T,
}

impl<T: Real> Plane<T> {
    /// Create a plane from its four coefficients.
    #[must_use]
    pub const fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Create the plane through `point` with the given (outward) normal.
    #[must_use]
    pub fn from_normal_and_point(normal: &Vector3<T>, point: &Point3<T>) -> Self {
        Self::new(normal.x, normal.y, normal.z, normal.dot(&point.coords))
    }

    /// The normal `(A, B, C)`. Not necessarily unit length.
    #[must_use]
    pub fn normal(&self) -> Vector3<T> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Signed distance `A·x + B·y + C·z − D` of a point from the plane.
    ///
    /// Negative means behind the normal (inside). Only a euclidean distance
    /// if the plane is normalized.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3<T>) -> T {
        self.a * point.x + self.b * point.y + self.c * point.z - self.d
    }

    /// Scale the plane so its normal has unit length.
    ///
    /// A plane that is already normalized is returned unchanged, as is a
    /// plane with a zero-length normal (see [`Plane::try_normalize`]).
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.try_normalize().unwrap_or(*self)
    }

    /// Scale the plane so its normal has unit length.
    ///
    /// Returns `None` if the normal is zero or not finite.
    #[must_use]
    pub fn try_normalize(&self) -> Option<Self> {
        let normal = self.normal();
        let len = normal.norm();
        if len.is_finite() && (len - T::one()).abs() <= T::COMPARISON_EPSILON {
            return Some(*self);
        }

        // Rescale first so the norm of huge coefficients does not overflow
        let scale = normal.amax();
        if scale == T::zero() || normal.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let scaled = *self * (T::one() / scale);
        let len = scaled.normal().norm();
        Some(scaled * (T::one() / len))
    }

    /// Angle between the two planes' normals, in `[0, π/2]`.
    ///
    /// Opposite normals count as parallel. NaN if either normal is zero.
    #[must_use]
    pub fn angle_between(&self, other: &Self) -> T {
        let n1 = self.normal();
        let n2 = other.normal();
        let cos = n1.dot(&n2).abs() / (n1.norm() * n2.norm());
        cos.min(T::one()).acos()
    }

    /// Checks if the volume straddles the plane.
    ///
    /// True when `|s| <= r` for center distance `s` and projected radius `r`,
    /// so a box touching the plane from either side intersects it.
    #[must_use]
    pub fn intersects<V: BoundingVolume<T>>(&self, volume: &V) -> bool {
        if volume.is_universal() {
            return true;
        }
        let s = self.signed_distance(&volume.center());
        let r = volume.projected_radius(&self.normal());
        straddles(s, r)
    }

    /// Checks if the volume is inside the plane or straddles it.
    ///
    /// False only when the volume lies entirely on the outer side. This is
    /// the frustum culling test: reject only what is fully outside.
    #[must_use]
    pub fn inside_or_intersecting<V: BoundingVolume<T>>(&self, volume: &V) -> bool {
        if volume.is_universal() {
            return true;
        }
        let s = self.signed_distance(&volume.center());
        let r = volume.projected_radius(&self.normal());
        not_outside(s, r)
    }

    /// [`Plane::intersects`] for an axis-aligned cuboid given by center and size.
    #[must_use]
    pub fn intersects_cuboid(&self, center: &Point3<T>, size: &Vector3<T>) -> bool {
        let half: T = convert(0.5);
        let r = self.normal().abs().dot(&(size * half));
        straddles(self.signed_distance(center), r)
    }

    /// [`Plane::inside_or_intersecting`] for an axis-aligned cuboid given by
    /// center and size.
    #[must_use]
    pub fn inside_or_intersecting_cuboid(&self, center: &Point3<T>, size: &Vector3<T>) -> bool {
        let half: T = convert(0.5);
        let r = self.normal().abs().dot(&(size * half));
        not_outside(self.signed_distance(center), r)
    }
}

// Non-finite distances come from universal or corrupted boxes; keep them.
fn straddles<T: Real>(s: T, r: T) -> bool {
    if !s.is_finite() || !r.is_finite() {
        return true;
    }
    s.abs() <= r
}

fn not_outside<T: Real>(s: T, r: T) -> bool {
    if !s.is_finite() || !r.is_finite() {
        return true;
    }
    // Fully inside wins over fully outside when the box is flat on the plane
    s <= -r || s < r
}

impl<T: Real> Mul<T> for Plane<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(
            self.a * scalar,
            self.b * scalar,
            self.c * scalar,
            self.d * scalar,
        )
    }
}

impl<T: Real> Neg for Plane<T> {
    type Output = Self;

    /// The same plane with the inner and outer half-spaces swapped.
    fn neg(self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

impl<T: Real> AbsDiffEq for Plane<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::COMPARISON_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
            && self.d.abs_diff_eq(&other.d, epsilon)
    }
}

impl<T: Real> RelativeEq for Plane<T> {
    fn default_max_relative() -> T {
        T::COMPARISON_EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.c.relative_eq(&other.c, epsilon, max_relative)
            && self.d.relative_eq(&other.d, epsilon, max_relative)
    }
}
