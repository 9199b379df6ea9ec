//! Cyclic Jacobi diagonalization of symmetric 3×3 matrices.
//!
//! Each iteration picks the largest off-diagonal element `a[p][q]` and
//! applies the plane rotation that zeroes it. The accumulated rotations form
//! the eigenvector matrix; the diagonal converges to the eigenvalues.

use nalgebra::{Matrix3, Point3, Vector3, convert};
use tracing::{debug, trace, warn};

use crate::covariance::{centroid, covariance_matrix};
use crate::error::{EigenError, SolverResult};
use crate::params::EigenParams;
use crate::real::Real;
use crate::result::{EigenResult, PointEigen};

const OFF_DIAGONAL: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Decompose a symmetric 3×3 matrix into eigenvalues and eigenvectors.
///
/// Only the symmetric part `(m + mᵀ) / 2` of the input is used. The loop
/// stops once every off-diagonal magnitude is at most
/// `tolerance · ‖m‖_F`, or after `params.max_iterations` rotations.
///
/// Never fails: a zero or rank-deficient matrix yields zero eigenvalues with
/// an orthonormal basis, and a non-finite matrix yields non-finite
/// eigenvalues paired with the standard basis.
///
/// # Example
///
/// ```
/// use cull_eigen::{EigenParams, decompose_symmetric};
/// use nalgebra::Matrix3;
///
/// let m = Matrix3::new(2.0, 1.0, 0.0, 1.0, 2.0, 0.0, 0.0, 0.0, 5.0);
/// let eigen = decompose_symmetric(&m, &EigenParams::default());
///
/// let mut values = eigen.values;
/// values.sort_by(f64::total_cmp);
/// assert!((values[0] - 1.0).abs() < 1e-9);
/// assert!((values[1] - 3.0).abs() < 1e-9);
/// assert!((values[2] - 5.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn decompose_symmetric<T: Real>(matrix: &Matrix3<T>, params: &EigenParams<T>) -> EigenResult<T> {
    let half: T = convert(0.5);
    let mut a = (matrix + matrix.transpose()) * half;
    let mut v = Matrix3::<T>::identity();

    let norm = a.norm();
    if !norm.is_finite() {
        debug!("non-finite matrix passed to symmetric eigen solver");
        return EigenResult {
            values: [norm; 3],
            vectors: [Vector3::x(), Vector3::y(), Vector3::z()],
            iterations: 0,
            converged: false,
        };
    }

    let threshold = params.effective_tolerance() * norm;
    let two: T = convert(2.0);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < params.max_iterations {
        let (p, q) = largest_off_diagonal(&a);
        let apq = a[(p, q)];
        if apq.abs() <= threshold {
            converged = true;
            break;
        }

        let theta = (a[(q, q)] - a[(p, p)]) / (two * apq);
        let sign = if theta >= T::zero() { T::one() } else { -T::one() };
        let t = sign / (theta.abs() + (theta * theta + T::one()).sqrt());
        let c = T::one() / (t * t + T::one()).sqrt();
        let s = t * c;

        let mut rotation = Matrix3::<T>::identity();
        rotation[(p, p)] = c;
        rotation[(q, q)] = c;
        rotation[(p, q)] = s;
        rotation[(q, p)] = -s;

        a = rotation.transpose() * a * rotation;
        a[(p, q)] = T::zero();
        a[(q, p)] = T::zero();
        v *= rotation;
        iterations += 1;

        trace!(iteration = iterations, p, q, "jacobi rotation");
    }

    if !converged {
        let (p, q) = largest_off_diagonal(&a);
        converged = a[(p, q)].abs() <= threshold;
    }

    if converged {
        debug!(iterations, "symmetric eigen solver converged");
    } else {
        warn!(
            iterations,
            max_iterations = params.max_iterations,
            "symmetric eigen solver hit iteration cap before converging"
        );
    }

    let vectors = [0, 1, 2].map(|i| {
        let column: Vector3<T> = v.column(i).into_owned();
        column.try_normalize(T::zero()).unwrap_or(column)
    });

    EigenResult {
        values: [a[(0, 0)], a[(1, 1)], a[(2, 2)]],
        vectors,
        iterations,
        converged,
    }
}

/// Decompose the covariance of a point set.
///
/// Computes the centroid, the covariance (scaled per `params.scale`) and its
/// eigenpairs. An empty slice gives a zero covariance at the origin with the
/// standard basis as eigenvectors.
///
/// # Example
///
/// ```
/// use cull_eigen::{EigenParams, decompose_points};
/// use nalgebra::Point3;
///
/// let points = [
///     Point3::new(0.0_f32, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(10.0, 1.0, 0.0),
/// ];
/// let fit = decompose_points(&points, &EigenParams::default());
/// let primary = fit.eigen.sorted_descending().vectors[0];
/// assert!(primary.x.abs() > 0.99);
/// ```
#[must_use]
pub fn decompose_points<T: Real>(points: &[Point3<T>], params: &EigenParams<T>) -> PointEigen<T> {
    if points.is_empty() {
        debug!("decomposing empty point set");
    }

    let center = centroid(points);
    let covariance = covariance_matrix(points, &center, params.scale);
    let eigen = decompose_symmetric(&covariance, params);

    PointEigen {
        centroid: center,
        covariance,
        eigen,
    }
}

/// [`decompose_symmetric`] with parameter validation.
///
/// # Errors
///
/// Returns an error if `params` fails [`EigenParams::validate`].
pub fn decompose_symmetric_checked<T: Real>(
    matrix: &Matrix3<T>,
    params: &EigenParams<T>,
) -> SolverResult<EigenResult<T>> {
    params.validate()?;
    Ok(decompose_symmetric(matrix, params))
}

/// [`decompose_points`] with input and parameter validation.
///
/// # Errors
///
/// Returns [`EigenError::EmptyPointSet`] for an empty slice, or an error if
/// `params` fails [`EigenParams::validate`].
pub fn decompose_points_checked<T: Real>(
    points: &[Point3<T>],
    params: &EigenParams<T>,
) -> SolverResult<PointEigen<T>> {
    if points.is_empty() {
        return Err(EigenError::EmptyPointSet);
    }
    params.validate()?;
    Ok(decompose_points(points, params))
}

fn largest_off_diagonal<T: Real>(a: &Matrix3<T>) -> (usize, usize) {
    let mut best = OFF_DIAGONAL[0];
    for &(i, j) in &OFF_DIAGONAL[1..] {
        if a[(i, j)].abs() > a[best].abs() {
            best = (i, j);
        }
    }
    best
}
