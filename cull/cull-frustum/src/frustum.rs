//! View frustum extracted from a projection matrix.

use cull_bounds::{Aabb, BoundingVolume, project_point};
use cull_eigen::Real;
use nalgebra::{Matrix4, Point3, RowVector4};
use tracing::debug;

use crate::depth::ClipDepth;
use crate::error::{ProjectionError, ProjectionResult};
use crate::plane::Plane;

/// The six planes bounding a camera's visible volume.
///
/// Planes are extracted from the rows of a projection (or view-projection)
/// matrix and live in that matrix's input space. Every normal points out of
/// the frustum, so a point is inside when all six signed distances are
/// non-positive. Planes are not normalized; call [`Frustum::normalized`]
/// before comparing distances across planes.
///
/// Corners are not stored. [`Frustum::corners`] recomputes them from the
/// source matrix on request.
///
/// # Example
///
/// ```
/// use cull_bounds::Aabb;
/// use cull_frustum::{Frustum, perspective_fov_lh};
/// use nalgebra::Point3;
///
/// let projection = perspective_fov_lh(std::f64::consts::FRAC_PI_2, 1.0, 2.0, 10.0).unwrap();
/// let frustum = Frustum::from_projection(&projection);
///
/// let visible = Aabb::new(Point3::new(-1.0, -1.0, 4.0), Point3::new(1.0, 1.0, 6.0));
/// let behind = Aabb::new(Point3::new(-1.0, -1.0, -6.0), Point3::new(1.0, 1.0, -4.0));
/// assert!(frustum.contains_or_intersects(&visible));
/// assert!(!frustum.contains_or_intersects(&behind));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum<T: Real> {
    /// Left plane.
    pub left: Plane<T>,
    /// Right plane.
    pub right: Plane<T>,
    /// Bottom plane.
    pub bottom: Plane<T>,
    /// Top plane.
    pub top: Plane<T>,
    /// Near plane.
    pub near: Plane<T>,
    /// Far plane.
    pub far: Plane<T>,
    projection: Matrix4<T>,
    depth: ClipDepth,
}

impl<T: Real> Frustum<T> {
    /// Extract the frustum of a projection with `[-1, 1]` clip depth.
    #[must_use]
    pub fn from_projection(projection: &Matrix4<T>) -> Self {
        Self::from_projection_with_depth(projection, ClipDepth::default())
    }

    /// Extract the frustum of a projection with the given clip depth range.
    #[must_use]
    pub fn from_projection_with_depth(projection: &Matrix4<T>, depth: ClipDepth) -> Self {
        let empty = Plane::new(T::zero(), T::zero(), T::zero(), T::zero());
        let mut frustum = Self {
            left: empty,
            right: empty,
            bottom: empty,
            top: empty,
            near: empty,
            far: empty,
            projection: *projection,
            depth,
        };
        frustum.calculate_planes(projection);
        frustum
    }

    /// Recompute all six planes from `projection`, replacing the source
    /// matrix. Idempotent for the same input.
    pub fn calculate_planes(&mut self, projection: &Matrix4<T>) {
        let r1 = projection.row(0).into_owned();
        let r2 = projection.row(1).into_owned();
        let r3 = projection.row(2).into_owned();
        let r4 = projection.row(3).into_owned();

        self.left = plane_from_row(&(r4 + r1));
        self.right = plane_from_row(&(r4 - r1));
        self.bottom = plane_from_row(&(r4 + r2));
        self.top = plane_from_row(&(r4 - r2));
        self.near = match self.depth {
            ClipDepth::NegativeOneToOne => plane_from_row(&(r4 + r3)),
            ClipDepth::ZeroToOne => plane_from_row(&r3),
        };
        self.far = plane_from_row(&(r4 - r3));
        self.projection = *projection;
    }

    /// The matrix the planes were extracted from.
    #[must_use]
    pub fn projection(&self) -> &Matrix4<T> {
        &self.projection
    }

    /// The clip depth convention of the source matrix.
    #[must_use]
    pub fn depth(&self) -> ClipDepth {
        self.depth
    }

    /// The planes in left, right, bottom, top, near, far order.
    #[must_use]
    pub fn planes(&self) -> [Plane<T>; 6] {
        [
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        ]
    }

    /// A copy with every plane normalized.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            left: self.left.normalize(),
            right: self.right.normalize(),
            bottom: self.bottom.normalize(),
            top: self.top.normalize(),
            near: self.near.normalize(),
            far: self.far.normalize(),
            ..*self
        }
    }

    /// The 8 corners in the source matrix's input space.
    ///
    /// Near bottom-left, bottom-right, top-left, top-right, then the same
    /// four on the far plane. A singular matrix gives non-finite corners.
    #[must_use]
    pub fn corners(&self) -> [Point3<T>; 8] {
        calculate_corners(&self.projection, self.depth)
    }

    /// [`Frustum::corners`] that reports a singular matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Singular`] if the source matrix has no
    /// inverse or a corner maps to infinity.
    pub fn try_corners(&self) -> ProjectionResult<[Point3<T>; 8]> {
        let corners = self.corners();
        if corners.iter().all(|c| c.iter().all(|v| v.is_finite())) {
            Ok(corners)
        } else {
            Err(ProjectionError::Singular)
        }
    }

    /// Checks if the volume is at least partly inside the frustum.
    ///
    /// Rejects only volumes fully outside one of the planes. Universal boxes
    /// always pass.
    #[must_use]
    pub fn contains_or_intersects<V: BoundingVolume<T>>(&self, volume: &V) -> bool {
        self.planes()
            .iter()
            .all(|plane| plane.inside_or_intersecting(volume))
    }

    /// Checks if a point is inside the frustum. Boundary points are inside.
    #[must_use]
    pub fn contains_point(&self, point: &Point3<T>) -> bool {
        self.planes()
            .iter()
            .all(|plane| plane.signed_distance(point) <= T::zero())
    }

    /// Axis-aligned bounds of the corners after `transform`.
    ///
    /// Non-finite corners give the universal box.
    #[must_use]
    pub fn corner_bounds(&self, transform: &Matrix4<T>) -> Aabb<T> {
        let corners = self.corners().map(|c| project_point(transform, &c));
        Aabb::from_points(&corners)
    }
}

/// Compute the 8 frustum corners of `projection` without building planes.
///
/// Each corner of the clip cube (`x, y ∈ {-1, 1}`, `z` at the near and far
/// depth of `depth`) is mapped through the inverse matrix and divided by `w`.
/// A singular matrix yields NaN corners.
#[must_use]
pub fn calculate_corners<T: Real>(projection: &Matrix4<T>, depth: ClipDepth) -> [Point3<T>; 8] {
    let Some(inverse) = projection.try_inverse() else {
        debug!("singular projection, frustum corners are undefined");
        return [Point3::new(T::NAN, T::NAN, T::NAN); 8];
    };

    let one = T::one();
    let (near, far) = (depth.near_z::<T>(), depth.far_z::<T>());
    [
        Point3::new(-one, -one, near),
        Point3::new(one, -one, near),
        Point3::new(-one, one, near),
        Point3::new(one, one, near),
        Point3::new(-one, -one, far),
        Point3::new(one, -one, far),
        Point3::new(-one, one, far),
        Point3::new(one, one, far),
    ]
    .map(|c| project_point(&inverse, &c))
}

// Clip rows are (a, b, c, d) with a·x + b·y + c·z + d >= 0 inside; flip the
// normal so it points out.
fn plane_from_row<T: Real>(row: &RowVector4<T>) -> Plane<T> {
    Plane::new(-row[0], -row[1], -row[2], row[3])
}
