//! Scalar precision trait shared by every `cull` crate.

use nalgebra::RealField;

/// A floating-point scalar usable by the bounding and culling kernel.
///
/// Extends [`RealField`] with the precision-dependent constants the
/// algorithms need. Implemented for `f32` and `f64`; the two variants run the
/// same code paths but converge to different tolerances.
pub trait Real: RealField + Copy {
    /// Positive infinity.
    const INFINITY: Self;

    /// Negative infinity.
    const NEG_INFINITY: Self;

    /// Not a number.
    const NAN: Self;

    /// Relative off-diagonal threshold at which the Jacobi loop stops.
    ///
    /// Measured against the Frobenius norm of the matrix being diagonalized.
    const EIGEN_TOLERANCE: Self;

    /// Default epsilon for approximate comparisons of derived quantities.
    const COMPARISON_EPSILON: Self;

    /// Converts a point count to a scalar.
    fn from_count(count: usize) -> Self;

    /// Returns `true` if the value is NaN.
    fn is_nan_value(self) -> bool;

    /// Widens the value to `f64` for diagnostics and error reporting.
    fn to_f64(self) -> f64;
}

impl Real for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const NAN: Self = f32::NAN;
    const EIGEN_TOLERANCE: Self = 1e-6;
    const COMPARISON_EPSILON: Self = 1e-5;

    #[allow(clippy::cast_precision_loss)]
    fn from_count(count: usize) -> Self {
        count as f32
    }

    fn is_nan_value(self) -> bool {
        self.is_nan()
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Real for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const NAN: Self = f64::NAN;
    const EIGEN_TOLERANCE: Self = 1e-12;
    const COMPARISON_EPSILON: Self = 1e-10;

    // Point counts beyond 2^52 are unsupported
    #[allow(clippy::cast_precision_loss)]
    fn from_count(count: usize) -> Self {
        count as f64
    }

    fn is_nan_value(self) -> bool {
        self.is_nan()
    }

    fn to_f64(self) -> f64 {
        self
    }
}
