//! Clip-space depth conventions.

use cull_eigen::Real;
use nalgebra::{Matrix4, convert};

/// Range that clip-space depth is mapped to after the perspective divide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipDepth {
    /// OpenGL convention, near plane at `z = -1`.
    #[default]
    NegativeOneToOne,
    /// Direct3D, Vulkan and wgpu convention, near plane at `z = 0`.
    ZeroToOne,
}

impl ClipDepth {
    /// Clip-space z of the near plane.
    #[must_use]
    pub fn near_z<T: Real>(self) -> T {
        match self {
            Self::NegativeOneToOne => -T::one(),
            Self::ZeroToOne => T::zero(),
        }
    }

    /// Clip-space z of the far plane.
    #[must_use]
    pub fn far_z<T: Real>(self) -> T {
        match self {
            Self::NegativeOneToOne | Self::ZeroToOne => T::one(),
        }
    }

    /// Convert a projection built for `[-1, 1]` depth to this convention.
    ///
    /// For [`ClipDepth::ZeroToOne`] this remaps `z` to `(z + w) / 2`; the
    /// other convention is returned as is.
    #[must_use]
    pub fn adapt<T: Real>(self, projection: &Matrix4<T>) -> Matrix4<T> {
        match self {
            Self::NegativeOneToOne => *projection,
            Self::ZeroToOne => {
                let half: T = convert(0.5);
                let mut remap = Matrix4::identity();
                remap[(2, 2)] = half;
                remap[(2, 3)] = half;
                remap * projection
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector4;

    #[test]
    fn test_default_is_gl() {
        assert_eq!(ClipDepth::default(), ClipDepth::NegativeOneToOne);
        assert_relative_eq!(ClipDepth::default().near_z::<f64>(), -1.0);
        assert_relative_eq!(ClipDepth::ZeroToOne.near_z::<f32>(), 0.0);
    }

    #[test]
    fn test_adapt_maps_near_and_far() {
        // Depth-only projection: z_clip = z_view, w = 1
        let gl = Matrix4::<f64>::identity();
        let zo = ClipDepth::ZeroToOne.adapt(&gl);

        let near = zo * Vector4::new(0.0, 0.0, -1.0, 1.0);
        let far = zo * Vector4::new(0.0, 0.0, 1.0, 1.0);
        assert_relative_eq!(near.z / near.w, 0.0);
        assert_relative_eq!(far.z / far.w, 1.0);

        assert_eq!(ClipDepth::NegativeOneToOne.adapt(&gl), gl);
    }
}
