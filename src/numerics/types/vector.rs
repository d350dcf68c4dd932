// src/numerics/types/vector.rs
// Fixed-size vectors with a generic element type (default f32).
// Uses the Scalar/FloatingPoint adapter from super::traits.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};

use super::traits::{FloatingPoint, Scalar};
use crate::numerics::error::{NumericsError, Result};

/// A 2-component vector. Components can also be read as `u`/`v` texture
/// coordinates or as `r`/`a` channels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2<T = f32> {
    pub x: T,
    pub y: T,
}

/// A 3-component vector. Components can also be read as `r`/`g`/`b` channels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector3<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4-component vector. Components can also be read as `r`/`g`/`b`/`a`
/// channels.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector4<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Operations shared by every fixed-size vector, so the free functions below
/// work on any dimension.
pub trait FixedVector:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<<Self as FixedVector>::Element, Output = Self>
    + Div<<Self as FixedVector>::Element, Output = Self>
{
    type Element: Scalar;

    /// Number of components.
    const DIMENSION: usize;

    fn dot(&self, other: &Self) -> Self::Element;

    fn length_squared(&self) -> Self::Element {
        self.dot(self)
    }

    fn length(&self) -> Self::Element {
        self.length_squared().sqrt()
    }
}

// Expands to `T` once per component; used to spell tuple types.
macro_rules! element_of {
    ($field:ident) => {
        T
    };
}

macro_rules! impl_vector {
    (
        $name:ident, $dim:expr,
        [$($index:literal => $field:ident),+],
        units: [$($unit:ident => $unit_index:literal),+],
        aliases: [$($alias:ident, $alias_mut:ident => $aliased:ident),+]
    ) => {
        impl<T: Scalar> $name<T> {
            /// The zero vector.
            pub const ZERO: Self = Self { $($field: T::ZERO),+ };

            $(pub const $unit: Self = Self::axis($unit_index);)+

            const fn axis(index: usize) -> Self {
                Self { $($field: if index == $index { T::ONE } else { T::ZERO }),+ }
            }

            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Vector with every component set to `value`.
            #[inline]
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            #[inline]
            pub fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            pub fn one() -> Self {
                Self::splat(T::ONE)
            }

            #[inline]
            pub fn to_array(self) -> [T; $dim] {
                [$(self.$field),+]
            }

            /// Checked component access.
            pub fn get(&self, index: usize) -> Result<T> {
                match index {
                    $($index => Ok(self.$field),)+
                    _ => Err(NumericsError::IndexOutOfRange { index, dimension: $dim }),
                }
            }

            /// Checked mutable component access.
            pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
                match index {
                    $($index => Ok(&mut self.$field),)+
                    _ => Err(NumericsError::IndexOutOfRange { index, dimension: $dim }),
                }
            }

            #[inline]
            pub fn dot(&self, other: &Self) -> T {
                let mut sum = T::ZERO;
                $(sum += self.$field * other.$field;)+
                sum
            }

            /// Squared Euclidean length (avoids the square root).
            #[inline]
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            /// Euclidean length. Truncated for integer element types.
            #[inline]
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Divides this vector by its length in place.
            ///
            /// The length must be non-zero. Debug builds assert this; release
            /// builds produce NaN/Inf for floats and panic on integer division
            /// by zero. Integer vectors truncate, so most of them normalize to
            /// zero components.
            #[inline]
            pub fn normalize(&mut self) -> &mut Self {
                let length = self.length();
                debug_assert!(length != T::ZERO, "cannot normalize a zero-length vector");
                *self /= length;
                self
            }

            /// Normalized copy of this vector. Same precondition as
            /// [`Self::normalize`].
            #[inline]
            pub fn normalized(&self) -> Self {
                let mut copy = *self;
                copy.normalize();
                copy
            }

            /// Normalized copy, or [`NumericsError::ZeroLengthVector`] when
            /// the length is zero.
            pub fn try_normalized(&self) -> Result<Self> {
                let length = self.length();
                if length == T::ZERO {
                    return Err(NumericsError::ZeroLengthVector);
                }
                Ok(*self / length)
            }

            $(
                #[inline]
                pub fn $alias(&self) -> T {
                    self.$aliased
                }

                #[inline]
                pub fn $alias_mut(&mut self) -> &mut T {
                    &mut self.$aliased
                }
            )+
        }

        impl<T: Scalar> FixedVector for $name<T> {
            type Element = T;

            const DIMENSION: usize = $dim;

            #[inline]
            fn dot(&self, other: &Self) -> T {
                $name::dot(self, other)
            }
        }

        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    $($index => &self.$field,)+
                    _ => panic!(
                        "index {} out of range for {} with {} components",
                        index, stringify!($name), $dim
                    ),
                }
            }
        }

        impl<T: Scalar> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($index => &mut self.$field,)+
                    _ => panic!(
                        "index {} out of range for {} with {} components",
                        index, stringify!($name), $dim
                    ),
                }
            }
        }

        impl_vector!(@binops $name, [$($field),+],
            (Add, add, AddAssign, add_assign),
            (Sub, sub, SubAssign, sub_assign),
            (Mul, mul, MulAssign, mul_assign),
            (Div, div, DivAssign, div_assign),
            (Rem, rem, RemAssign, rem_assign)
        );

        impl<T: Scalar + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: FloatingPoint> AbsDiffEq for $name<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& self.$field.abs_diff_eq(&other.$field, epsilon))+
            }
        }

        impl<T: FloatingPoint> RelativeEq for $name<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                true $(&& self.$field.relative_eq(&other.$field, epsilon, max_relative))+
            }
        }

        // Conversions between vectors, tuples and arrays

        impl<T: Scalar> From<($(element_of!($field)),+)> for $name<T> {
            fn from(tuple: ($(element_of!($field)),+)) -> Self {
                let ($($field),+) = tuple;
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> From<&($(element_of!($field)),+)> for $name<T> {
            fn from(tuple: &($(element_of!($field)),+)) -> Self {
                let ($($field),+) = *tuple;
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> From<$name<T>> for ($(element_of!($field)),+) {
            fn from(v: $name<T>) -> Self {
                ($(v.$field),+)
            }
        }

        impl<T: Scalar> From<&$name<T>> for ($(element_of!($field)),+) {
            fn from(v: &$name<T>) -> Self {
                ($(v.$field),+)
            }
        }

        impl<T: Scalar> From<[T; $dim]> for $name<T> {
            fn from(array: [T; $dim]) -> Self {
                Self { $($field: array[$index]),+ }
            }
        }

        impl<T: Scalar> From<&[T; $dim]> for $name<T> {
            fn from(array: &[T; $dim]) -> Self {
                Self { $($field: array[$index]),+ }
            }
        }

        impl<T: Scalar> From<$name<T>> for [T; $dim] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: Scalar> From<&$name<T>> for [T; $dim] {
            fn from(v: &$name<T>) -> Self {
                v.to_array()
            }
        }

        impl_vector!(@scalar_lhs $name, [$($field),+], f32, f64, i32, i64, u8, u16, u32);
    };

    (@binops $name:ident, $fields:tt, $(($op:ident, $method:ident, $op_assign:ident, $method_assign:ident)),+) => {
        $(impl_vector!(@binop $name, $fields, $op, $method, $op_assign, $method_assign);)+
    };

    (@binop $name:ident, [$($field:ident),+], $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        // Component-wise with another vector
        impl<T: Scalar> $op for $name<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self { $($field: self.$field.$method(rhs.$field)),+ }
            }
        }

        // Scalar broadcast on the right
        impl<T: Scalar> $op<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                Self { $($field: self.$field.$method(rhs)),+ }
            }
        }

        impl<T: Scalar> $op_assign for $name<T> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                $(self.$field.$method_assign(rhs.$field);)+
            }
        }

        impl<T: Scalar> $op_assign<T> for $name<T> {
            #[inline]
            fn $method_assign(&mut self, rhs: T) {
                $(self.$field.$method_assign(rhs);)+
            }
        }
    };

    // Scalar broadcast on the left; `s - v` and `s / v` apply the scalar as
    // the left operand of every component.
    (@scalar_lhs $name:ident, $fields:tt, $($t:ty),+) => {
        $(impl_vector!(@scalar_lhs_one $name, $fields, $t);)+
    };

    (@scalar_lhs_one $name:ident, [$($field:ident),+], $t:ty) => {
        impl Add<$name<$t>> for $t {
            type Output = $name<$t>;

            #[inline]
            fn add(self, rhs: $name<$t>) -> $name<$t> {
                $name { $($field: self + rhs.$field),+ }
            }
        }

        impl Sub<$name<$t>> for $t {
            type Output = $name<$t>;

            #[inline]
            fn sub(self, rhs: $name<$t>) -> $name<$t> {
                $name { $($field: self - rhs.$field),+ }
            }
        }

        impl Mul<$name<$t>> for $t {
            type Output = $name<$t>;

            #[inline]
            fn mul(self, rhs: $name<$t>) -> $name<$t> {
                $name { $($field: self * rhs.$field),+ }
            }
        }

        impl Div<$name<$t>> for $t {
            type Output = $name<$t>;

            #[inline]
            fn div(self, rhs: $name<$t>) -> $name<$t> {
                $name { $($field: self / rhs.$field),+ }
            }
        }
    };
}

impl_vector!(
    Vector2, 2,
    [0 => x, 1 => y],
    units: [UNIT_X => 0, UNIT_Y => 1],
    aliases: [u, u_mut => x, v, v_mut => y, r, r_mut => x, a, a_mut => y]
);

impl_vector!(
    Vector3, 3,
    [0 => x, 1 => y, 2 => z],
    units: [UNIT_X => 0, UNIT_Y => 1, UNIT_Z => 2],
    aliases: [r, r_mut => x, g, g_mut => y, b, b_mut => z]
);

impl_vector!(
    Vector4, 4,
    [0 => x, 1 => y, 2 => z, 3 => w],
    units: [UNIT_X => 0, UNIT_Y => 1, UNIT_Z => 2, UNIT_W => 3],
    aliases: [r, r_mut => x, g, g_mut => y, b, b_mut => z, a, a_mut => w]
);

impl<T: Scalar> Vector2<T> {
    /// Appends a third component.
    #[inline]
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: FloatingPoint> Vector2<T> {
    /// Rotates this vector counter-clockwise by `radians` in place.
    pub fn rotate(&mut self, radians: T) -> &mut Self {
        *self = self.rotated(radians);
        self
    }

    /// Copy of this vector rotated counter-clockwise by `radians`.
    pub fn rotated(&self, radians: T) -> Self {
        let (sin, cos) = (radians.sin(), radians.cos());
        Self::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }
}

impl<T: Scalar> Vector3<T> {
    /// Builds a vector from the `x`/`y` of `xy` and the given `z`.
    #[inline]
    pub fn from_xy(xy: Vector2<T>, z: T) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    #[inline]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Drops the `z` component.
    #[inline]
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub fn from_xy(xy: Vector2<T>, z: T, w: T) -> Self {
        Self::new(xy.x, xy.y, z, w)
    }

    #[inline]
    pub fn from_xyz(xyz: Vector3<T>, w: T) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    /// Drops the `w` component.
    #[inline]
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl<T: Scalar> From<Vector2<T>> for Vector3<T> {
    fn from(xy: Vector2<T>) -> Self {
        Self::from_xy(xy, T::ZERO)
    }
}

impl<T: Scalar> From<Vector3<T>> for Vector4<T> {
    fn from(xyz: Vector3<T>) -> Self {
        Self::from_xyz(xyz, T::ZERO)
    }
}

/// Sum of pairwise component products.
#[inline]
pub fn dot<V: FixedVector>(a: &V, b: &V) -> V::Element {
    a.dot(b)
}

/// Right-handed cross product; only defined for 3-component vectors.
#[inline]
pub fn cross<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> Vector3<T> {
    a.cross(b)
}

/// Length of `b - a`.
#[inline]
pub fn distance<V: FixedVector>(a: &V, b: &V) -> V::Element {
    (*b - *a).length()
}

/// Normalized copy of `v`. `v` must have non-zero length.
#[inline]
pub fn normalized<V: FixedVector>(v: &V) -> V {
    let length = v.length();
    debug_assert!(
        length != <V::Element as Scalar>::ZERO,
        "cannot normalize a zero-length vector"
    );
    *v / length
}

/// Normalizes `v` in place. `v` must have non-zero length.
#[inline]
pub fn normalize<V: FixedVector>(v: &mut V) -> &mut V {
    *v = normalized(v);
    v
}

/// `a + t * (b - a)`. Not clamped: `t` outside `[0, 1]` extrapolates.
#[inline]
pub fn lerp<V: FixedVector>(a: &V, b: &V, t: V::Element) -> V {
    *a + (*b - *a) * t
}

/// Completes the (assumed unit) vector `n` to a right-handed orthonormal
/// basis `{n, p, q}` and returns `(p, q)`.
///
/// When `n` leans towards the z axis, `p` is built in the y/z plane, otherwise
/// in the x/y plane, so the construction never divides by a tiny projection.
pub fn get_orthogonal<T: FloatingPoint>(n: &Vector3<T>) -> (Vector3<T>, Vector3<T>) {
    if n.z.abs() > T::FRAC_1_SQRT_2 {
        // p in the y/z plane
        let a = n.y * n.y + n.z * n.z;
        let k = T::ONE / a.sqrt();
        let p = Vector3::new(T::ZERO, -n.z * k, n.y * k);
        // q = n x p
        let q = Vector3::new(a * k, -n.x * p.z, n.x * p.y);
        (p, q)
    } else {
        // p in the x/y plane
        let a = n.x * n.x + n.y * n.y;
        let k = T::ONE / a.sqrt();
        let p = Vector3::new(-n.y * k, n.x * k, T::ZERO);
        // q = n x p
        let q = Vector3::new(-n.z * p.y, n.z * p.x, a * k);
        (p, q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vector_add_sub() {
        let a = Vector3::new(1.0_f32, 2.0_f32, 3.0_f32);
        let b = Vector3::new(4.0_f32, 5.0_f32, 6.0_f32);

        let sum = a + b;
        assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));

        let diff = sum - a;
        assert_eq!(diff, b);

        let lsq = a.length_squared();
        assert!((lsq - 14.0).abs() < 1e-6);

        let len = a.length();
        assert!((len - (14.0_f32.sqrt())).abs() < 1e-6);
    }

    #[test]
    fn test_addition_is_associative_and_commutative_for_integers() {
        let a = Vector4::new(1_i32, -2, 3, 7);
        let b = Vector4::new(5_i32, 0, -8, 2);
        let c = Vector4::new(-3_i32, 9, 4, -1);

        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_addition_is_commutative_for_floats() {
        let a = Vector2::new(0.1_f64, 0.7);
        let b = Vector2::new(0.2_f64, -1.3);
        let c = Vector2::new(5.5_f64, 1e-3);

        assert_eq!(a + b, b + a);
        assert_abs_diff_eq!((a + b) + c, a + (b + c), epsilon = 1e-12);
    }

    #[test]
    fn test_component_wise_and_scalar_operators() {
        let a = Vector3::new(2.0_f32, 4.0, 6.0);
        let b = Vector3::new(1.0_f32, 2.0, 4.0);

        assert_eq!(a * b, Vector3::new(2.0, 8.0, 24.0));
        assert_eq!(a / b, Vector3::new(2.0, 2.0, 1.5));
        assert_eq!(a % b, Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(a + 1.0, Vector3::new(3.0, 5.0, 7.0));
        assert_eq!(a - 1.0, Vector3::new(1.0, 3.0, 5.0));
        assert_eq!(a * 0.5, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(a / 2.0, Vector3::new(1.0, 2.0, 3.0));

        assert_eq!(2.0 * a, Vector3::new(4.0, 8.0, 12.0));
        assert_eq!(1.0 + a, Vector3::new(3.0, 5.0, 7.0));
        assert_eq!(10.0 - a, Vector3::new(8.0, 6.0, 4.0));
        assert_eq!(12.0 / a, Vector3::new(6.0, 3.0, 2.0));
        assert_eq!(-a, Vector3::new(-2.0, -4.0, -6.0));
    }

    #[test]
    fn test_compound_assignment_matches_binary_operators() {
        let a = Vector4::new(1.0_f64, 2.0, 3.0, 4.0);
        let b = Vector4::new(0.5_f64, -1.0, 2.0, 8.0);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= b;
        assert_eq!(c, a * b);
        c /= b;
        assert_eq!(c, a);
        c *= 3.0;
        assert_eq!(c, a * 3.0);
        c %= 2.0;
        assert_eq!(c, (a * 3.0) % 2.0);

        let mut i = Vector2::new(7_u32, 9);
        i %= Vector2::new(4, 5);
        assert_eq!(i, Vector2::new(3, 4));
    }

    #[test]
    fn test_unit_constants_and_default() {
        assert_eq!(Vector2::<f32>::UNIT_X, Vector2::new(1.0, 0.0));
        assert_eq!(Vector3::<i32>::UNIT_Z, Vector3::new(0, 0, 1));
        assert_eq!(Vector4::<f64>::UNIT_W, Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vector4::<f64>::default(), Vector4::ZERO);
        assert_eq!(Vector3::<u8>::one(), Vector3::new(1, 1, 1));
        assert_eq!(Vector3::<f32>::zero(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_indexing_and_aliases_share_storage() {
        let mut v = Vector4::new(0.1_f32, 0.2, 0.3, 0.4);
        assert_eq!(v[0], v.x);
        assert_eq!(v[3], v.a());
        assert_eq!(v.r(), v.x);
        assert_eq!(v.b(), v.z);

        v[1] = 0.9;
        assert_eq!(v.g(), 0.9);
        *v.a_mut() = 1.0;
        assert_eq!(v.w, 1.0);

        let mut uv = Vector2::new(0.25_f32, 0.75);
        assert_eq!((uv.u(), uv.v()), (0.25, 0.75));
        *uv.v_mut() = 0.5;
        assert_eq!(uv.y, 0.5);
        assert_eq!(uv.a(), 0.5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let v = Vector3::new(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn test_checked_access() {
        let mut v = Vector2::new(4_i64, 5);
        assert_eq!(v.get(1), Ok(5));
        assert_eq!(
            v.get(2),
            Err(NumericsError::IndexOutOfRange { index: 2, dimension: 2 })
        );
        *v.get_mut(0).unwrap() = 9;
        assert_eq!(v.x, 9);
    }

    #[test]
    fn test_dot_is_symmetric() {
        let a = Vector3::new(1.5_f32, -2.0, 0.25);
        let b = Vector3::new(-4.0_f32, 3.0, 8.0);
        assert_eq!(dot(&a, &b), dot(&b, &a));
        assert_eq!(a.dot(&b), -10.0);
    }

    #[test]
    fn test_cross_is_anti_symmetric_and_orthogonal() {
        let a = Vector3::new(1.0_f64, 2.0, 3.0);
        let b = Vector3::new(-2.0_f64, 0.5, 4.0);
        let c = cross(&a, &b);

        assert_eq!(c, -cross(&b, &a));
        assert_abs_diff_eq!(dot(&a, &c), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dot(&b, &c), 0.0, epsilon = 1e-12);
        assert_eq!(
            cross(&Vector3::<f32>::UNIT_X, &Vector3::UNIT_Y),
            Vector3::UNIT_Z
        );
    }

    #[test]
    fn test_normalize() {
        let v = Vector3::new(3.0_f32, -4.0, 12.0);
        assert_abs_diff_eq!(v.normalized().length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(normalized(&v).length(), 1.0, epsilon = 1e-6);

        let mut w = Vector2::new(0.0_f64, 7.0);
        w.normalize();
        assert_eq!(w, Vector2::UNIT_Y);

        let mut u = Vector4::new(2.0_f64, 0.0, 0.0, 0.0);
        normalize(&mut u);
        assert_eq!(u, Vector4::UNIT_X);
    }

    #[test]
    fn test_integer_normalize_truncates() {
        let v = Vector2::new(3_i32, 4);
        assert_eq!(v.length(), 5);
        assert_eq!(v.normalized(), Vector2::new(0, 0));
    }

    #[test]
    fn test_try_normalized_rejects_zero_vector() {
        assert_eq!(
            Vector3::<f32>::ZERO.try_normalized(),
            Err(NumericsError::ZeroLengthVector)
        );
        assert_eq!(
            Vector2::new(0.0_f32, -2.0).try_normalized(),
            Ok(Vector2::new(0.0, -1.0))
        );
    }

    #[test]
    fn test_distance() {
        let a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(4.0_f32, 6.0, 3.0);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_lerp_midpoint_and_extrapolation() {
        let mid = lerp(&Vector2::<f32>::UNIT_X, &Vector2::UNIT_Y, 0.5);
        assert_eq!(mid, Vector2::new(0.5, 0.5));

        let a = Vector3::new(0.0_f64, 0.0, 0.0);
        let b = Vector3::new(1.0_f64, 2.0, 4.0);
        assert_eq!(lerp(&a, &b, 2.0), Vector3::new(2.0, 4.0, 8.0));
        assert_eq!(lerp(&a, &b, -1.0), Vector3::new(-1.0, -2.0, -4.0));
    }

    #[test]
    fn test_rotate_vector2() {
        let v = Vector2::new(1.0_f64, 0.0);
        assert_abs_diff_eq!(
            v.rotated(std::f64::consts::FRAC_PI_2),
            Vector2::new(0.0, 1.0),
            epsilon = 1e-12
        );

        let mut w = Vector2::new(0.0_f32, 2.0);
        w.rotate(std::f32::consts::PI);
        assert_abs_diff_eq!(w, Vector2::new(0.0, -2.0), epsilon = 1e-6);
    }

    #[test]
    fn test_get_orthogonal_right_handed_basis() {
        let inputs = [
            Vector3::new(0.0_f64, 0.0, 1.0),
            Vector3::new(0.0_f64, 0.0, -1.0),
            Vector3::new(1.0_f64, 0.0, 0.0),
            Vector3::new(1.0_f64, 2.0, 3.0).normalized(),
            Vector3::new(-0.3_f64, 0.9, 0.1).normalized(),
        ];

        for n in inputs {
            let (p, q) = get_orthogonal(&n);
            assert_abs_diff_eq!(dot(&n, &p), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(dot(&n, &q), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(dot(&p, &q), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(p.length(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-12);
            assert!(dot(&n, &cross(&p, &q)) > 0.0);
        }
    }

    #[test]
    fn test_get_orthogonal_unit_z() {
        let (p, q) = get_orthogonal(&Vector3::<f32>::UNIT_Z);
        assert_eq!(p, Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(q, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_dimension_changes() {
        let v2 = Vector2::new(1_i32, 2);
        let v3 = v2.extend(3);
        let v4 = v3.extend(4);
        assert_eq!(v4, Vector4::new(1, 2, 3, 4));
        assert_eq!(v4.truncate(), v3);
        assert_eq!(v3.truncate(), v2);
        assert_eq!(Vector3::from(v2), Vector3::new(1, 2, 0));
        assert_eq!(Vector4::from_xy(v2, 7, 8), Vector4::new(1, 2, 7, 8));
        assert_eq!(Vector4::from(v3), Vector4::from_xyz(v3, 0));
    }

    #[test]
    fn test_tuple_conversions() {
        let tup = (1.0f32, 2.0f32, 3.0f32);

        let v: Vector3<f32> = tup.into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let back: (f32, f32, f32) = v.into();
        assert_eq!(back, tup);

        let v = Vector3::from(&tup);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let pair: (i32, i32) = (&Vector2::new(5, 6)).into();
        assert_eq!(pair, (5, 6));
    }

    #[test]
    fn test_array_conversions() {
        let arr = [1.0f32, 2.0f32, 3.0f32, 4.0f32];

        let v: Vector4<f32> = arr.into();
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));

        let back: [f32; 4] = v.into();
        assert_eq!(back, arr);

        let from_ref = Vector4::from(&arr);
        assert_eq!(from_ref, v);

        let borrowed: [f32; 4] = (&v).into();
        assert_eq!(borrowed, arr);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_bincode_generic_roundtrip() {
        let config = bincode::config::standard();

        let v_f32 = Vector3::new(1.0f32, 2.0f32, 3.0f32);
        let enc_f32 = bincode::serde::encode_to_vec(v_f32, config).unwrap();
        let (dec_f32, _): (Vector3<f32>, usize) =
            bincode::serde::decode_from_slice(&enc_f32, config).unwrap();
        assert_eq!(v_f32, dec_f32);

        let v_u8 = Vector4::new(255_u8, 128, 0, 255);
        let enc_u8 = bincode::serde::encode_to_vec(v_u8, config).unwrap();
        let (dec_u8, _): (Vector4<u8>, usize) =
            bincode::serde::decode_from_slice(&enc_u8, config).unwrap();
        assert_eq!(v_u8, dec_u8);
    }
}
