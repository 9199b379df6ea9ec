//! Centroid and covariance accumulation for point sets.

use nalgebra::{Matrix3, Point3, Vector3};

use crate::params::CovarianceScale;
use crate::real::Real;

/// Arithmetic mean of a point set.
///
/// Returns the origin for an empty slice.
#[must_use]
pub fn centroid<T: Real>(points: &[Point3<T>]) -> Point3<T> {
    if points.is_empty() {
        return Point3::origin();
    }

    let mut sum = Vector3::zeros();
    for p in points {
        sum += p.coords;
    }
    Point3::from(sum / T::from_count(points.len()))
}

/// Covariance matrix of a point set around `center`.
///
/// Accumulates `(p - center)(p - center)ᵀ` over all points. With
/// [`CovarianceScale::Mean`] the sum is divided by the number of points.
/// The result is symmetric by construction.
#[must_use]
pub fn covariance_matrix<T: Real>(
    points: &[Point3<T>],
    center: &Point3<T>,
    scale: CovarianceScale,
) -> Matrix3<T> {
    let mut cov = Matrix3::zeros();

    for p in points {
        let d = p - center;
        cov += d * d.transpose();
    }

    match scale {
        CovarianceScale::Mean if !points.is_empty() => cov / T::from_count(points.len()),
        _ => cov,
    }
}
