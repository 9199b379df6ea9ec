//! Result types for eigen-decomposition.

use nalgebra::{Matrix3, Point3, Vector3};

use crate::real::Real;

/// Three eigenpairs of a symmetric 3×3 matrix.
///
/// `values[i]` belongs to `vectors[i]`. The vectors are unit length and
/// mutually orthogonal. They come out in the order the Jacobi sweep leaves
/// them on the diagonal, which is not sorted by magnitude; use
/// [`EigenResult::sorted_descending`] when a canonical order is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigenResult<T: Real> {
    /// Eigenvalues.
    pub values: [T; 3],
    /// Unit eigenvectors, index-paired with `values`.
    pub vectors: [Vector3<T>; 3],
    /// Number of Jacobi rotations applied.
    pub iterations: usize,
    /// Whether the off-diagonal mass fell below tolerance before the cap.
    pub converged: bool,
}

impl<T: Real> EigenResult<T> {
    /// The eigenvectors as the columns of a matrix.
    ///
    /// For a symmetric input `C` this is the orthogonal `V` with
    /// `C = V · diag(λ) · Vᵀ`.
    #[must_use]
    pub fn matrix(&self) -> Matrix3<T> {
        Matrix3::from_columns(&self.vectors)
    }

    /// Rebuild `V · diag(λ) · Vᵀ` from the eigenpairs.
    #[must_use]
    pub fn reconstruct(&self) -> Matrix3<T> {
        let v = self.matrix();
        let lambda = Matrix3::from_diagonal(&Vector3::from(self.values));
        v * lambda * v.transpose()
    }

    /// Iterate over `(eigenvalue, eigenvector)` pairs in stored order.
    pub fn pairs(&self) -> impl Iterator<Item = (T, Vector3<T>)> + '_ {
        self.values.iter().copied().zip(self.vectors.iter().copied())
    }

    /// A copy with the pairs reordered by eigenvalue, largest first.
    ///
    /// NaN eigenvalues compare as equal and keep their relative order.
    #[must_use]
    pub fn sorted_descending(&self) -> Self {
        let mut indices = [0usize, 1, 2];
        indices.sort_by(|&a, &b| {
            self.values[b]
                .partial_cmp(&self.values[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Self {
            values: indices.map(|i| self.values[i]),
            vectors: indices.map(|i| self.vectors[i]),
            ..*self
        }
    }
}

/// Eigen-decomposition of a point set's covariance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointEigen<T: Real> {
    /// Arithmetic mean of the points.
    pub centroid: Point3<T>,
    /// Covariance matrix the decomposition was computed from.
    pub covariance: Matrix3<T>,
    /// Eigenpairs of `covariance`.
    pub eigen: EigenResult<T>,
}

impl<T: Real> PointEigen<T> {
    /// The principal axes (eigenvectors) of the point set.
    #[must_use]
    pub fn axes(&self) -> [Vector3<T>; 3] {
        self.eigen.vectors
    }

    /// The variances (eigenvalues) along each axis.
    #[must_use]
    pub fn values(&self) -> [T; 3] {
        self.eigen.values
    }
}
