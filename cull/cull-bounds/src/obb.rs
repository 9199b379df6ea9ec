//! Oriented bounding box fitted by principal-component analysis.

use cull_eigen::{EigenParams, Real, decompose_points};
use nalgebra::{Matrix3, Point3, Vector3, convert};
use tracing::debug;

use crate::aabb::Aabb;
use crate::error::{BoundsError, BoundsResult};

/// An oriented bounding box (OBB).
///
/// The box frame has its origin at the centroid of the fitted points and its
/// axes along the principal axes (covariance eigenvectors). `min` and `max`
/// are extents in that local frame, so the box need not be centered on the
/// centroid.
///
/// Non-finite input yields the universal box: `min = -∞` and `max = +∞` on
/// every local axis.
///
/// # Example
///
/// ```
/// use cull_bounds::Obb;
/// use nalgebra::Point3;
///
/// let points = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(4.0, 4.0, 0.0),
///     Point3::new(1.0, -1.0, 0.0),
///     Point3::new(5.0, 3.0, 0.0),
/// ];
///
/// let obb = Obb::from_points(&points);
/// for p in &points {
///     assert!(obb.contains(p));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb<T: Real> {
    /// Origin of the local frame (centroid of the fitted points).
    pub centroid: Point3<T>,
    /// Orthonormal local axes in world coordinates.
    pub axes: [Vector3<T>; 3],
    /// Minimum extent along each local axis.
    pub min: Vector3<T>,
    /// Maximum extent along each local axis.
    pub max: Vector3<T>,
    /// Covariance eigenvalues paired with `axes`.
    pub eigenvalues: [T; 3],
}

impl<T: Real> Obb<T> {
    /// Fit an OBB to a point set with default solver parameters.
    ///
    /// Returns the universal box for an empty set or when any component of
    /// any point is NaN or infinite. A single point gives a zero-size box at
    /// that point.
    #[must_use]
    pub fn from_points(points: &[Point3<T>]) -> Self {
        Self::from_points_with(points, &EigenParams::default())
    }

    /// Fit an OBB to a point set with explicit solver parameters.
    #[must_use]
    pub fn from_points_with(points: &[Point3<T>], params: &EigenParams<T>) -> Self {
        if points.is_empty() {
            debug!("empty point set bounded by universal box");
            return Self::universal();
        }

        if points.iter().any(|p| p.iter().any(|v| !v.is_finite())) {
            debug!(
                points = points.len(),
                "non-finite point component, using universal box"
            );
            return Self::universal();
        }

        let fit = decompose_points(points, params);
        let axes = fit.axes();

        let mut min = Vector3::repeat(T::INFINITY);
        let mut max = Vector3::repeat(T::NEG_INFINITY);
        for p in points {
            let d = *p - fit.centroid;
            for (i, axis) in axes.iter().enumerate() {
                let proj = d.dot(axis);
                min[i] = min[i].min(proj);
                max[i] = max[i].max(proj);
            }
        }

        // Finite points can still overflow the covariance
        let finite = axes.iter().all(|a| a.iter().all(|v| v.is_finite()))
            && min.iter().chain(max.iter()).all(|v| v.is_finite());
        if !finite {
            debug!(
                points = points.len(),
                "covariance overflowed, using universal box"
            );
            return Self::universal();
        }

        Self {
            centroid: fit.centroid,
            axes,
            min,
            max,
            eigenvalues: fit.values(),
        }
    }

    /// [`Obb::from_points`] that rejects an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::EmptyPointSet`] if `points` is empty.
    pub fn try_from_points(points: &[Point3<T>]) -> BoundsResult<Self> {
        Self::try_from_points_with(points, &EigenParams::default())
    }

    /// [`Obb::from_points_with`] that rejects an empty set and invalid params.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::EmptyPointSet`] if `points` is empty, or
    /// [`BoundsError::Eigen`] if `params` fails validation.
    pub fn try_from_points_with(
        points: &[Point3<T>],
        params: &EigenParams<T>,
    ) -> BoundsResult<Self> {
        if points.is_empty() {
            return Err(BoundsError::EmptyPointSet);
        }
        params.validate()?;
        Ok(Self::from_points_with(points, params))
    }

    /// The box spanning `[-∞, +∞]` along every axis.
    #[must_use]
    pub fn universal() -> Self {
        Self {
            centroid: Point3::origin(),
            axes: [Vector3::x(), Vector3::y(), Vector3::z()],
            min: Vector3::repeat(T::NEG_INFINITY),
            max: Vector3::repeat(T::INFINITY),
            eigenvalues: [T::INFINITY; 3],
        }
    }

    /// Check if this is the universal box.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        self.min.iter().all(|&v| v == T::NEG_INFINITY) && self.max.iter().all(|&v| v == T::INFINITY)
    }

    /// The axes as the columns of a rotation matrix (local to world).
    #[must_use]
    pub fn rotation(&self) -> Matrix3<T> {
        Matrix3::from_columns(&self.axes)
    }

    /// Size along each local axis, `max - min`.
    #[must_use]
    pub fn size(&self) -> Vector3<T> {
        self.max - self.min
    }

    /// Half-extents along each local axis.
    #[must_use]
    pub fn half_extents(&self) -> Vector3<T> {
        let half: T = convert(0.5);
        self.size() * half
    }

    /// Box center in the local frame, `(min + max) / 2`.
    #[must_use]
    pub fn local_center(&self) -> Vector3<T> {
        let half: T = convert(0.5);
        (self.min + self.max) * half
    }

    /// Box center in world coordinates.
    ///
    /// The universal box reports its centroid.
    #[must_use]
    pub fn center(&self) -> Point3<T> {
        if self.is_universal() {
            return self.centroid;
        }
        self.centroid + self.rotation() * self.local_center()
    }

    /// Express a world point in the local frame.
    #[must_use]
    pub fn to_local(&self, point: &Point3<T>) -> Vector3<T> {
        self.rotation().transpose() * (*point - self.centroid)
    }

    /// The 8 world-space corners, same ordering as [`Aabb::corners`] in the
    /// local frame.
    #[must_use]
    pub fn corners(&self) -> [Point3<T>; 8] {
        if self.is_universal() {
            return Aabb::universal().corners();
        }
        let local = Aabb {
            min: Point3::from(self.min),
            max: Point3::from(self.max),
        };
        let rotation = self.rotation();
        local.corners().map(|c| self.centroid + rotation * c.coords)
    }

    /// Checks if a point is inside the OBB.
    ///
    /// Boundary points are inside, with a tolerance scaled by the box size so
    /// the fitted points themselves always pass.
    #[must_use]
    pub fn contains(&self, point: &Point3<T>) -> bool {
        if self.is_universal() {
            return true;
        }
        let local = self.to_local(point);
        let eps = T::COMPARISON_EPSILON * (T::one() + self.size().amax());
        (0..3).all(|i| local[i] >= self.min[i] - eps && local[i] <= self.max[i] + eps)
    }

    /// The world-space AABB enclosing this box.
    #[must_use]
    pub fn to_aabb(&self) -> Aabb<T> {
        if self.is_universal() {
            return Aabb::universal();
        }
        Aabb::from_points(&self.corners())
    }
}
