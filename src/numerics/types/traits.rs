// src/numerics/types/traits.rs
// Scalar math adapter. Generic code calls these instead of the inherent
// float methods so the same algorithm serves every element type.

use core::fmt::Debug;
use core::ops::Neg;

use num_traits::{Num, NumAssign};

/// Element type of a vector or matrix.
///
/// Covers both floating point and integer types. Integer `sqrt` goes through
/// `f64` and truncates, so `length` and `normalize` on integer vectors give
/// truncated results.
pub trait Scalar:
    Num + NumAssign + Copy + Debug + Default + PartialOrd + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    fn sqrt(self) -> Self;

    fn abs(self) -> Self;

    /// Lossy conversion used for error reporting.
    fn to_f64(self) -> f64;
}

/// Floating point element type. Required by everything that needs
/// trigonometry, a machine epsilon or a meaningful square root.
pub trait FloatingPoint:
    Scalar + Neg<Output = Self> + approx::AbsDiffEq<Epsilon = Self> + approx::RelativeEq
{
    /// Machine epsilon of the type.
    const EPSILON: Self;
    const ONE_HALF: Self;
    const PI: Self;
    const FRAC_PI_2: Self;
    const FRAC_1_SQRT_2: Self;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;

    /// Converts a literal into this type, rounding for `f32`.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_float_scalar {
    ($f:tt) => {
        impl Scalar for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn sqrt(self) -> Self {
                $f::sqrt(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $f::abs(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }

        impl FloatingPoint for $f {
            const EPSILON: Self = $f::EPSILON;
            const ONE_HALF: Self = 0.5;
            const PI: Self = std::$f::consts::PI;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const FRAC_1_SQRT_2: Self = std::$f::consts::FRAC_1_SQRT_2;

            #[inline]
            fn sin(self) -> Self {
                $f::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $f::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $f::tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                $f::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                $f::acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                $f::atan(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                $f::atan2(self, other)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $f
            }
        }
    };
}

macro_rules! impl_signed_int_scalar {
    ($i:tt) => {
        impl Scalar for $i {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;

            #[inline]
            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $i
            }

            #[inline]
            fn abs(self) -> Self {
                $i::abs(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

macro_rules! impl_unsigned_int_scalar {
    ($u:tt) => {
        impl Scalar for $u {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;

            #[inline]
            fn sqrt(self) -> Self {
                (self as f64).sqrt() as $u
            }

            #[inline]
            fn abs(self) -> Self {
                self
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_float_scalar!(f32);
impl_float_scalar!(f64);

impl_signed_int_scalar!(i32);
impl_signed_int_scalar!(i64);

impl_unsigned_int_scalar!(u8);
impl_unsigned_int_scalar!(u16);
impl_unsigned_int_scalar!(u32);

#[cfg(test)]
mod tests {
    use super::*;

    fn hypot<T: Scalar>(a: T, b: T) -> T {
        Scalar::sqrt(a * a + b * b)
    }

    #[test]
    fn test_generic_sqrt_for_floats_and_integers() {
        assert_eq!(hypot(3.0_f32, 4.0), 5.0);
        assert_eq!(hypot(3.0_f64, 4.0), 5.0);
        assert_eq!(hypot(3_i32, 4), 5);
        // Integer square roots truncate
        assert_eq!(Scalar::sqrt(8_u32), 2);
    }

    #[test]
    fn test_abs_for_signed_and_unsigned() {
        assert_eq!(Scalar::abs(-2.5_f32), 2.5);
        assert_eq!(Scalar::abs(-7_i64), 7);
        assert_eq!(Scalar::abs(7_u8), 7);
    }

    #[test]
    fn test_trig_dispatch() {
        assert!((FloatingPoint::sin(std::f64::consts::FRAC_PI_2) - 1.0).abs() < 1e-12);
        assert!((FloatingPoint::atan2(1.0_f32, 1.0) - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert_eq!(<f32 as FloatingPoint>::EPSILON, f32::EPSILON);
        assert_eq!(<f64 as FloatingPoint>::from_f64(0.25), 0.25);
    }
}
