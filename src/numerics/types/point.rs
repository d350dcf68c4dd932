// src/numerics/types/point.rs
// Point, color and per-element-type aliases over the vector types.

use super::vector::{Vector2, Vector3, Vector4};

/// Point2/Point3 are aliases to the vector types to represent points in space.
///
/// The aliases keep generic template parameterization.
pub type Point2<T = f32> = Vector2<T>;
pub type Point3<T = f32> = Vector3<T>;

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

pub type Vector2d = Vector2<f64>;
pub type Vector3d = Vector3<f64>;
pub type Vector4d = Vector4<f64>;

pub type Vector2i = Vector2<i32>;
pub type Vector3i = Vector3<i32>;
pub type Vector4i = Vector4<i32>;

/// Texture coordinates, read through `u()`/`v()`.
pub type TexCoord = Vector2<f32>;

// Colors, read through `r()`/`g()`/`b()`/`a()`
pub type Color3f = Vector3<f32>;
pub type Colour3f = Color3f;
pub type Color4f = Vector4<f32>;
pub type Colour4f = Color4f;

pub type Color3b = Vector3<u8>;
pub type Colour3b = Color3b;
pub type Color4b = Vector4<u8>;
pub type Colour4b = Color4b;

pub type Color3s = Vector3<u16>;
pub type Colour3s = Color3s;
pub type Color4s = Vector4<u16>;
pub type Colour4s = Color4s;

pub type Color3i = Vector3<u32>;
pub type Colour3i = Color3i;
pub type Color4i = Vector4<u32>;
pub type Colour4i = Color4i;
