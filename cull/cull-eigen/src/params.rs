//! Parameters for the Jacobi eigen solver.

use nalgebra::convert;

use crate::error::{EigenError, SolverResult};
use crate::real::Real;

/// How the covariance accumulation is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CovarianceScale {
    /// Divide the accumulated outer products by the number of points.
    #[default]
    Mean,
    /// Keep the raw sum of outer products.
    Sum,
}

/// Parameters for the symmetric eigen solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigenParams<T: Real> {
    /// Maximum number of Jacobi rotations. Default: 100
    pub max_iterations: usize,

    /// Relative off-diagonal tolerance. If None, uses [`Real::EIGEN_TOLERANCE`].
    pub tolerance: Option<T>,

    /// Covariance scaling applied when decomposing point sets.
    /// Default: [`CovarianceScale::Mean`]
    pub scale: CovarianceScale,
}

impl<T: Real> Default for EigenParams<T> {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: None,
            scale: CovarianceScale::Mean,
        }
    }
}

impl<T: Real> EigenParams<T> {
    /// Params that iterate longer and converge to a tighter tolerance.
    #[must_use]
    pub fn precise() -> Self {
        Self {
            max_iterations: 200,
            tolerance: Some(T::EIGEN_TOLERANCE * convert::<f64, T>(0.01)),
            ..Default::default()
        }
    }

    /// Params for quick, approximate fits (e.g. per-frame OBB refits).
    #[must_use]
    pub fn fast() -> Self {
        Self {
            max_iterations: 32,
            tolerance: Some(T::EIGEN_TOLERANCE * convert::<f64, T>(100.0)),
            ..Default::default()
        }
    }

    /// Set the rotation cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the relative convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the covariance scaling.
    #[must_use]
    pub fn with_scale(mut self, scale: CovarianceScale) -> Self {
        self.scale = scale;
        self
    }

    /// The tolerance in effect.
    #[must_use]
    pub fn effective_tolerance(&self) -> T {
        self.tolerance.unwrap_or(T::EIGEN_TOLERANCE)
    }

    /// Check the params for values the solver cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`EigenError::ZeroIterations`] if `max_iterations` is zero and
    /// [`EigenError::InvalidTolerance`] if the tolerance is not positive and finite.
    pub fn validate(&self) -> SolverResult<()> {
        if self.max_iterations == 0 {
            return Err(EigenError::ZeroIterations);
        }
        let tolerance = self.effective_tolerance();
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(EigenError::InvalidTolerance(tolerance.to_f64()));
        }
        Ok(())
    }
}
