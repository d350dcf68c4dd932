// src/numerics/projection.rs
// Perspective and off-center frustum projection matrices.
//
// Both builders start from the zero matrix and fill only the cells below;
// the w-row/column placement follows the row-vector convention
// (`[2][3] = 1`, translation term in `[3][2]`).

use crate::numerics::error::{NumericsError, Result};
use crate::numerics::types::matrix::Matrix4x4;
use crate::numerics::types::traits::FloatingPoint;

fn degenerate<M>(reason: &str) -> Result<M> {
    tracing::debug!(reason, "rejecting degenerate projection");
    Err(NumericsError::DegenerateProjection {
        reason: reason.to_string(),
    })
}

/// Perspective projection with a vertical field of view of `y_fov` radians.
///
/// ```
/// use fulgor_numerics::make_perspective;
///
/// let m = make_perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0).unwrap();
/// assert_eq!(m[2][3], 1.0);
/// ```
pub fn make_perspective<T: FloatingPoint>(
    y_fov: T,
    aspect_ratio: T,
    near_z: T,
    far_z: T,
) -> Result<Matrix4x4<T>> {
    let tan_half_fov = (y_fov * T::ONE_HALF).tan();
    if aspect_ratio == T::ZERO {
        return degenerate("aspect ratio is zero");
    }
    if tan_half_fov == T::ZERO {
        return degenerate("field of view is zero");
    }
    if far_z == near_z {
        return degenerate("near and far planes coincide");
    }

    let depth = far_z - near_z;
    let mut m = Matrix4x4::ZERO;
    m[0][0] = T::ONE / (aspect_ratio * tan_half_fov);
    m[1][1] = T::ONE / tan_half_fov;
    m[2][2] = far_z / depth;
    m[2][3] = T::ONE;
    m[3][2] = -(far_z * near_z) / depth;
    Ok(m)
}

/// Off-center perspective projection for the frustum bounded by `left`,
/// `right`, `bottom` and `top` on the near plane.
pub fn make_frustum_projection<T: FloatingPoint>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near_z: T,
    far_z: T,
) -> Result<Matrix4x4<T>> {
    if right == left {
        return degenerate("left and right planes coincide");
    }
    if top == bottom {
        return degenerate("top and bottom planes coincide");
    }
    if far_z == near_z {
        return degenerate("near and far planes coincide");
    }

    let width = right - left;
    let height = top - bottom;
    let depth = far_z - near_z;
    let two_near = T::TWO * near_z;

    let mut m = Matrix4x4::ZERO;
    m[0][0] = two_near / width;
    m[1][1] = two_near / height;
    m[2][0] = -(right + left) / width;
    m[2][1] = -(top + bottom) / height;
    m[2][2] = far_z / depth;
    m[2][3] = T::ONE;
    m[3][2] = -(far_z * near_z) / depth;
    Ok(m)
}

/// Camera projection settings
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveConfig {
    /// Vertical field of view in radians
    pub y_fov: f32,
    /// Width divided by height
    pub aspect_ratio: f32,
    /// Distance to the near clipping plane
    pub near_z: f32,
    /// Distance to the far clipping plane
    pub far_z: f32,
}

impl Default for PerspectiveConfig {
    fn default() -> Self {
        Self {
            y_fov: 60.0_f32.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near_z: 0.1,
            far_z: 1000.0,
        }
    }
}

impl PerspectiveConfig {
    /// 16:9 with a 60 degree vertical field of view
    pub fn standard_widescreen() -> Self {
        Self::default()
    }

    /// Square viewport, e.g. for shadow or cube-map faces
    pub fn square() -> Self {
        Self {
            y_fov: 90.0_f32.to_radians(),
            aspect_ratio: 1.0,
            ..Self::default()
        }
    }

    pub fn with_y_fov(mut self, y_fov: f32) -> Self {
        self.y_fov = y_fov;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_clip_planes(mut self, near_z: f32, far_z: f32) -> Self {
        self.near_z = near_z;
        self.far_z = far_z;
        self
    }

    /// Build the projection matrix for this configuration
    pub fn build(&self) -> Result<Matrix4x4<f32>> {
        make_perspective(self.y_fov, self.aspect_ratio, self.near_z, self.far_z)
    }
}
