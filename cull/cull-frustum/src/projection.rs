//! Left-handed projection matrix builders.
//!
//! All matrices use the column-vector convention (`clip = M · v`), look down
//! `+z` and map depth to `[-1, 1]`. Use [`ClipDepth::adapt`] for `[0, 1]`.
//!
//! [`ClipDepth::adapt`]: crate::ClipDepth::adapt

use cull_eigen::Real;
use nalgebra::{Matrix4, convert};

use crate::error::{ProjectionError, ProjectionResult};

/// Symmetric perspective projection from a vertical field of view.
///
/// # Arguments
///
/// * `fovy` - Vertical field of view in radians, in `(0, π]`
/// * `aspect` - Width over height
/// * `near`, `far` - Positive clip distances with `near < far`
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidFieldOfView`],
/// [`ProjectionError::InvalidAspectRatio`] or
/// [`ProjectionError::InvalidDepthRange`] for arguments out of range.
///
/// # Example
///
/// ```
/// use cull_frustum::perspective_fov_lh;
/// use nalgebra::{Point3, Vector4};
///
/// let m = perspective_fov_lh(std::f64::consts::FRAC_PI_2, 1.0, 2.0, 10.0).unwrap();
/// let clip = m * Vector4::new(2.0, 2.0, 2.0, 1.0);
/// assert!((clip.x / clip.w - 1.0).abs() < 1e-12);
/// assert!((clip.z / clip.w + 1.0).abs() < 1e-12);
/// ```
pub fn perspective_fov_lh<T: Real>(
    fovy: T,
    aspect: T,
    near: T,
    far: T,
) -> ProjectionResult<Matrix4<T>> {
    let fov_ok = fovy > T::zero() && fovy <= T::pi();
    if !fov_ok {
        return Err(ProjectionError::InvalidFieldOfView(fovy.to_f64()));
    }
    let aspect_ok = aspect > T::zero() && aspect.is_finite();
    if !aspect_ok {
        return Err(ProjectionError::InvalidAspectRatio(aspect.to_f64()));
    }
    check_perspective_depth(near, far)?;

    let half: T = convert(0.5);
    let y_max = near * (fovy * half).tan();
    let x_max = y_max * aspect;

    perspective_off_center_lh(-x_max, x_max, -y_max, y_max, near, far)
}

/// Perspective projection for an arbitrary view rectangle on the near plane.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidDepthRange`] unless
/// `0 < near < far`, and [`ProjectionError::DegenerateExtents`] if the
/// rectangle has zero width or height.
pub fn perspective_off_center_lh<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> ProjectionResult<Matrix4<T>> {
    check_perspective_depth(near, far)?;
    check_extents(left, right, bottom, top)?;

    let two: T = convert(2.0);
    let x = two * near / (right - left);
    let y = two * near / (top - bottom);
    let a = (left + right) / (left - right);
    let b = (top + bottom) / (bottom - top);
    let c = (far + near) / (far - near);
    let d = -(two * far * near) / (far - near);

    let zero = T::zero();
    let one = T::one();
    #[rustfmt::skip]
    let m = Matrix4::new(
        x,    zero, a,   zero,
        zero, y,    b,   zero,
        zero, zero, c,   d,
        zero, zero, one, zero,
    );
    Ok(m)
}

/// Orthographic projection for an axis-aligned view box.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidDepthRange`] if `near == far`, and
/// [`ProjectionError::DegenerateExtents`] if the view rectangle has zero
/// width or height.
pub fn orthographic_off_center_lh<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> ProjectionResult<Matrix4<T>> {
    if !(near.is_finite() && far.is_finite()) || near == far {
        return Err(ProjectionError::InvalidDepthRange {
            near: near.to_f64(),
            far: far.to_f64(),
        });
    }
    check_extents(left, right, bottom, top)?;

    let two: T = convert(2.0);
    let inv_rl = T::one() / (right - left);
    let inv_tb = T::one() / (top - bottom);
    let inv_fn = T::one() / (far - near);

    let mut m = Matrix4::zeros();
    m[(0, 0)] = two * inv_rl;
    m[(1, 1)] = two * inv_tb;
    m[(2, 2)] = two * inv_fn;
    m[(0, 3)] = -(right + left) * inv_rl;
    m[(1, 3)] = -(top + bottom) * inv_tb;
    m[(2, 3)] = -(far + near) * inv_fn;
    m[(3, 3)] = T::one();
    Ok(m)
}

fn check_perspective_depth<T: Real>(near: T, far: T) -> ProjectionResult<()> {
    let valid = near > T::zero() && far > T::zero() && near < far && far.is_finite();
    if valid {
        Ok(())
    } else {
        Err(ProjectionError::InvalidDepthRange {
            near: near.to_f64(),
            far: far.to_f64(),
        })
    }
}

fn check_extents<T: Real>(left: T, right: T, bottom: T, top: T) -> ProjectionResult<()> {
    let width = right - left;
    let height = top - bottom;
    if width == T::zero() || height == T::zero() || !width.is_finite() || !height.is_finite() {
        return Err(ProjectionError::DegenerateExtents {
            width: width.to_f64(),
            height: height.to_f64(),
        });
    }
    Ok(())
}
