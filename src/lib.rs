//! # Fulgor Numerics - Small Fixed-Size Linear Algebra
//!
//! Stack-allocated vectors, matrices and quaternions for the geometry and
//! rendering code of the Fulgor engine. Every type is generic over its
//! element type and defaults to `f32`.
//!
//! ## Core Features
//!
//! - **Vectors**: `Vector2/3/4` with component-wise operators, dot/cross,
//!   normalization, color and texture-coordinate accessors and swizzles
//! - **Matrices**: row-major `Matrix3x3`/`Matrix4x4` with products,
//!   transpose, determinant and checked inversion
//! - **Quaternions**: axis-angle and Euler construction, slerp, shortest-arc
//!   rotations and conversion to rotation matrices
//! - **Projection**: perspective and off-center frustum matrices
//!
//! ## Quick Start
//!
//! ```rust
//! use fulgor_numerics::{rotate_quaternion, Matrix3x3, Quaternion, Vector3};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let axis = Vector3::new(0.0_f32, 0.0, 1.0);
//! let q = Quaternion::from_axis_angle(&axis, std::f32::consts::FRAC_PI_2)?;
//!
//! let rotated = rotate_quaternion(&q, &Vector3::UNIT_X);
//! assert!((rotated.y - 1.0).abs() < 1e-6);
//!
//! // The same rotation as a matrix, inverted back
//! let m = q.to_matrix3x3();
//! let back = m.inverse_clone()? * rotated;
//! assert!((back.x - 1.0).abs() < 1e-6);
//!
//! let _identity = Matrix3x3::<f32>::IDENTITY;
//! # Ok(())
//! # }
//! ```

pub mod numerics;

// Re-export commonly used types for convenience
pub use numerics::*;

/// Version information for the fulgor-numerics crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_root_reexports() {
        let v: Vector3f = Vector3::new(1.0, 2.0, 2.0);
        assert_eq!(v.length(), 3.0);
        assert_eq!(Matrix4x4::<f32>::IDENTITY * Vector4::from_xyz(v, 1.0), Vector4::new(1.0, 2.0, 2.0, 1.0));
    }
}
