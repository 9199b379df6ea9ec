//! API Regression Tests for the Cull Crate Ecosystem
//!
//! These tests pin the public API and the reference numbers the crates are
//! expected to reproduce. They are organized in 3 tiers:
//!
//! - Tier 1: Eigen solver (cull-eigen)
//! - Tier 2: Bounding volumes (cull-bounds)
//! - Tier 3: Planes and frustums (cull-frustum)
//!
//! If any of these tests fail after API changes, it indicates a breaking change
//! that needs documentation in CHANGELOG.md and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use cull::prelude::*;
use cull::{bounds, eigen, frustum};

fn reference_points<T: Real>() -> Vec<Point3<T>> {
    [
        [90.0, 60.0, 90.0],
        [90.0, 90.0, 30.0],
        [60.0, 60.0, 60.0],
        [60.0, 60.0, 90.0],
        [30.0, 30.0, 30.0],
    ]
    .iter()
    .map(|&[x, y, z]| Point3::new(nalgebra::convert(x), nalgebra::convert(y), nalgebra::convert(z)))
    .collect()
}

// =============================================================================
// TIER 1: Eigen solver
// =============================================================================

mod tier1_eigen {
    use super::*;

    #[test]
    fn reference_decomposition_double() {
        let fit = decompose_points(&reference_points::<f64>(), &EigenParams::default());
        let expected = [910.07, 44.82, 629.11];
        for (value, e) in fit.eigen.values.iter().zip(expected) {
            assert_relative_eq!(*value, e, max_relative = 1e-4);
        }

        // Reference figures are the rows of the eigenvector matrix
        let v = fit.eigen.matrix();
        let rows = [
            [0.656, -0.649, -0.386],
            [0.429, 0.741, -0.516],
            [0.621, 0.173, 0.764],
        ];
        for (i, row) in rows.iter().enumerate() {
            for (j, e) in row.iter().enumerate() {
                assert_relative_eq!(v[(i, j)], *e, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn reference_decomposition_single() {
        let fit = decompose_points(&reference_points::<f32>(), &EigenParams::default());
        let expected = [910.07_f32, 44.82, 629.11];
        for (value, e) in fit.eigen.values.iter().zip(expected) {
            assert_relative_eq!(*value, e, max_relative = 1e-3);
        }
    }

    #[test]
    fn reference_eigenvectors_single() {
        let fit = decompose_points(&reference_points::<f32>(), &EigenParams::default());
        let v = fit.eigen.matrix();
        let rows = [
            [0.656_f32, -0.649, -0.386],
            [0.429, 0.741, -0.516],
            [0.621, 0.173, 0.764],
        ];
        for (i, row) in rows.iter().enumerate() {
            for (j, e) in row.iter().enumerate() {
                assert_relative_eq!(v[(i, j)], *e, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn sum_scale_multiplies_by_count() {
        let params = EigenParams::default().with_scale(eigen::CovarianceScale::Sum);
        let fit = decompose_points(&reference_points::<f64>(), &params);
        let sorted = fit.eigen.sorted_descending();
        assert_relative_eq!(sorted.values[0], 5.0 * 910.07, max_relative = 1e-4);
    }

    #[test]
    fn reconstruction_law() {
        let fit = decompose_points(&reference_points::<f64>(), &EigenParams::default());
        assert_relative_eq!(fit.eigen.reconstruct(), fit.covariance, epsilon = 1e-8);
    }

    #[test]
    fn checked_api_reports_errors() {
        assert_eq!(
            eigen::decompose_points_checked::<f64>(&[], &EigenParams::default()),
            Err(eigen::EigenError::EmptyPointSet)
        );
        let bad = EigenParams::<f32>::default().with_max_iterations(0);
        assert!(eigen::decompose_symmetric_checked(&Matrix3::identity(), &bad).is_err());
    }
}

// =============================================================================
// TIER 2: Bounding volumes
// =============================================================================

mod tier2_bounds {
    use super::*;

    #[test]
    fn nan_point_gives_universal_boxes() {
        let mut points = reference_points::<f64>();
        points.push(Point3::new(f64::NAN, 1.0, 1.0));

        let aabb = Aabb::from_points(&points);
        assert_eq!(aabb.min, Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY));
        assert_eq!(aabb.max, Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY));

        let obb = Obb::from_points(&points);
        assert_eq!(obb.min, Vector3::repeat(f64::NEG_INFINITY));
        assert_eq!(obb.max, Vector3::repeat(f64::INFINITY));
    }

    #[test]
    fn obb_axes_orthonormal_both_precisions() {
        let obb = bounds::Obbd::from_points(&reference_points::<f64>());
        let r = obb.rotation();
        assert_relative_eq!(r.transpose() * r, Matrix3::identity(), epsilon = 1e-9);

        let obb = bounds::Obbf::from_points(&reference_points::<f32>());
        let r = obb.rotation();
        assert_relative_eq!(r.transpose() * r, Matrix3::identity(), epsilon = 1e-4);
    }

    #[test]
    fn aabb_union_and_transform() {
        let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Point3::new(2.0, -1.0, 0.5), Point3::new(3.0, 0.0, 2.0));
        assert_eq!(a | b, b | a);
        assert_eq!(a | a, a);
        assert_eq!(a.transformed(&Matrix4::identity()), a);
    }

    #[test]
    fn ray_along_face_hits() {
        let a = bounds::Aabbf::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vector3::x());
        assert!(a.intersect_ray(&ray));
    }

    #[test]
    fn checked_constructors() {
        assert_eq!(
            Obb::<f64>::try_from_points(&[]),
            Err(bounds::BoundsError::EmptyPointSet)
        );
        assert!(Aabb::<f32>::try_from_points(&[Point3::origin()]).is_ok());
    }
}

// =============================================================================
// TIER 3: Planes and frustums
// =============================================================================

mod tier3_frustum {
    use super::*;

    #[test]
    fn plane_signed_distance_sign() {
        let plane = Plane::new(1.0, 0.0, 0.0, 5.0);
        assert_eq!(plane.signed_distance(&Point3::new(0.0, 1.0, 0.0)), -5.0);
    }

    #[test]
    fn reference_frustum() {
        let m = perspective_fov_lh(std::f64::consts::FRAC_PI_2, 1.0, 2.0, 10.0).unwrap();
        let f = Frustum::from_projection(&m);

        let corners = f.corners();
        assert_relative_eq!(corners[0], Point3::new(-2.0, -2.0, 2.0), epsilon = 1e-9);
        assert_relative_eq!(corners[3], Point3::new(2.0, 2.0, 2.0), epsilon = 1e-9);
        assert_relative_eq!(corners[4], Point3::new(-10.0, -10.0, 10.0), epsilon = 1e-9);
        assert_relative_eq!(corners[7], Point3::new(10.0, 10.0, 10.0), epsilon = 1e-9);

        let n = f.normalized();
        assert_relative_eq!(n.near, Plane::new(0.0, 0.0, -1.0, -2.0));
        assert_relative_eq!(n.far, Plane::new(0.0, 0.0, 1.0, 10.0));
    }

    #[test]
    fn culling_pipeline() {
        let m = perspective_fov_lh(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0).unwrap();
        let f = frustum::Frustumf::from_projection(&m);

        let visible = Obb::<f32>::from_points(&[
            Point3::new(-1.0, 0.0, 10.0),
            Point3::new(1.0, 0.5, 12.0),
            Point3::new(0.0, -0.5, 11.0),
        ]);
        let hidden = Aabb::<f32>::new(Point3::new(-1.0, -1.0, -20.0), Point3::new(1.0, 1.0, -10.0));

        assert!(f.contains_or_intersects(&visible));
        assert!(!hidden.inside_or_intersecting_frustum(&f));
        assert!(Aabb::<f32>::universal().inside_or_intersecting_frustum(&f));
    }

    #[test]
    fn perspective_transform_of_box_on_camera_plane_is_conservative() {
        let m = perspective_fov_lh(std::f64::consts::FRAC_PI_2, 1.0, 2.0, 10.0).unwrap();
        let a = Aabb::new(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 4.0));

        let t = a.transformed(&m);
        let inner = bounds::project_point(&m, &Point3::new(1.0, 1.0, 1e-6));
        assert!(t.contains(&inner));
        assert!(t.is_universal());
    }

    #[test]
    fn singular_projection_is_reported() {
        let f = Frustum::from_projection(&Matrix4::<f64>::zeros());
        assert_eq!(f.try_corners(), Err(frustum::ProjectionError::Singular));
    }
}

// =============================================================================
// Serialization (feature-gated)
// =============================================================================

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn frustum_serializes_through_json() {
        let m = perspective_fov_lh(1.0_f64, 1.5, 0.5, 50.0).unwrap();
        let f = Frustum::from_projection(&m);
        let json = serde_json::to_string(&f).unwrap();
        let back: Frustum<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }
}
