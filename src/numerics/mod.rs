// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules,
// the crate error type and the projection builders.

pub mod error;
pub mod projection;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod vector;
    pub mod swizzle;
    pub mod point;
    pub mod matrix;
    pub mod quaternion;
}

pub use error::{NumericsError, Result};
pub use projection::{make_frustum_projection, make_perspective, PerspectiveConfig};
pub use types::matrix::{inverse, Invertible, Matrix3x3, Matrix4x4};
pub use types::point::*;
pub use types::quaternion::{
    angle_between, rotate_quaternion, shortest_arc_quat, shortest_arc_quat_normalized, slerp,
    Quaternion, Quaterniond, Quaternionf,
};
pub use types::swizzle::Swizzle;
pub use types::traits::{FloatingPoint, Scalar};
pub use types::vector::{
    cross, distance, dot, get_orthogonal, lerp, normalize, normalized, FixedVector, Vector2,
    Vector3, Vector4,
};
