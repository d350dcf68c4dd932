// src/numerics/types/matrix.rs
// Row-major 3x3 and 4x4 matrices stored as row vectors.

use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::numerics::error::{NumericsError, Result};
use crate::numerics::types::traits::{FloatingPoint, Scalar};
use crate::numerics::types::vector::{Vector3, Vector4};

/// 3x3 matrix. `m[i]` is row `i` and `m[i][j]` the element at row `i`,
/// column `j`.
///
/// `Default` gives the zero matrix, not the identity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Matrix3x3<T = f32> {
    rows: [Vector3<T>; 3],
}

/// 4x4 matrix with the same row-major layout as [`Matrix3x3`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Matrix4x4<T = f32> {
    rows: [Vector4<T>; 4],
}

macro_rules! impl_matrix {
    (
        $name:ident, $vec:ident, $n:expr,
        rows: [$($row:ident),+],
        units: [$($unit:ident),+]
    ) => {
        impl<T: Scalar> $name<T> {
            pub const ZERO: Self = Self { rows: [<$vec<T>>::ZERO; $n] };

            pub const IDENTITY: Self = Self { rows: [$(<$vec<T>>::$unit),+] };

            /// Construct a new matrix from nested row arrays
            pub fn new(data: [[T; $n]; $n]) -> Self {
                Self { rows: data.map(<$vec<T>>::from) }
            }

            /// Construct a new matrix from row vectors
            pub const fn from_rows($($row: $vec<T>),+) -> Self {
                Self { rows: [$($row),+] }
            }

            /// Construct a new matrix from column vectors
            pub fn from_columns($($row: $vec<T>),+) -> Self {
                Self::from_rows($($row),+).transpose()
            }

            /// Get a row by index
            pub fn row(&self, idx: usize) -> $vec<T> {
                self[idx]
            }

            /// Get a column by index
            pub fn column(&self, idx: usize) -> $vec<T> {
                let mut column = <$vec<T>>::ZERO;
                for (i, row) in self.rows.iter().enumerate() {
                    column[i] = row[idx];
                }
                column
            }

            /// Zero matrix
            pub fn zero() -> Self {
                Self::ZERO
            }

            /// Identity matrix
            pub fn identity() -> Self {
                Self::IDENTITY
            }

            pub fn transpose(&self) -> Self {
                let mut result = Self::ZERO;
                for i in 0..$n {
                    result.rows[i] = self.column(i);
                }
                result
            }
        }

        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = $vec<T>;

            fn index(&self, idx: usize) -> &$vec<T> {
                assert!(idx < $n, "row {} out of range for {}", idx, stringify!($name));
                &self.rows[idx]
            }
        }

        impl<T: Scalar> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, idx: usize) -> &mut $vec<T> {
                assert!(idx < $n, "row {} out of range for {}", idx, stringify!($name));
                &mut self.rows[idx]
            }
        }

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;

            fn add(mut self, other: Self) -> Self {
                self += other;
                self
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;

            fn sub(mut self, other: Self) -> Self {
                self -= other;
                self
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            fn add_assign(&mut self, other: Self) {
                for (row, other_row) in self.rows.iter_mut().zip(other.rows) {
                    *row += other_row;
                }
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            fn sub_assign(&mut self, other: Self) {
                for (row, other_row) in self.rows.iter_mut().zip(other.rows) {
                    *row -= other_row;
                }
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, scalar: T) -> Self {
                Self { rows: self.rows.map(|row| row * scalar) }
            }
        }

        // Matrix product: row i of the result combines the rows of `rhs`
        // weighted by row i of `self`.
        impl<T: Scalar> Mul for $name<T> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                let mut result = Self::ZERO;
                for (result_row, row) in result.rows.iter_mut().zip(self.rows) {
                    for k in 0..$n {
                        *result_row += rhs.rows[k] * row[k];
                    }
                }
                result
            }
        }

        impl<T: Scalar> MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        // Column vector: result[i] = dot(row i, v)
        impl<T: Scalar> Mul<$vec<T>> for $name<T> {
            type Output = $vec<T>;

            fn mul(self, rhs: $vec<T>) -> $vec<T> {
                let mut result = <$vec<T>>::ZERO;
                for (i, row) in self.rows.iter().enumerate() {
                    result[i] = row.dot(&rhs);
                }
                result
            }
        }

        // Row vector: result = sum_k v[k] * row k
        impl<T: Scalar> Mul<$name<T>> for $vec<T> {
            type Output = $vec<T>;

            fn mul(self, rhs: $name<T>) -> $vec<T> {
                let mut result = <$vec<T>>::ZERO;
                for k in 0..$n {
                    result += rhs.rows[k] * self[k];
                }
                result
            }
        }

        impl<T: FloatingPoint> AbsDiffEq for $name<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.rows
                    .iter()
                    .zip(other.rows.iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T: FloatingPoint> RelativeEq for $name<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.rows
                    .iter()
                    .zip(other.rows.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

impl_matrix!(
    Matrix3x3, Vector3, 3,
    rows: [r0, r1, r2],
    units: [UNIT_X, UNIT_Y, UNIT_Z]
);

impl_matrix!(
    Matrix4x4, Vector4, 4,
    rows: [r0, r1, r2, r3],
    units: [UNIT_X, UNIT_Y, UNIT_Z, UNIT_W]
);

fn singular<M>(determinant: f64) -> Result<M> {
    tracing::debug!(determinant, "matrix is singular, refusing to invert");
    Err(NumericsError::SingularMatrix { determinant })
}

impl<T: Scalar> Matrix3x3<T> {
    /// `m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1]`
    fn cofactor(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> T {
        let m = &self.rows;
        m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1]
    }

    fn cofactor_vector(&self) -> Vector3<T> {
        Vector3::new(
            self.cofactor(1, 1, 2, 2),
            self.cofactor(1, 2, 2, 0),
            self.cofactor(1, 0, 2, 1),
        )
    }

    pub fn determinant(&self) -> T {
        self.rows[0].dot(&self.cofactor_vector())
    }
}

impl<T: FloatingPoint> Matrix3x3<T> {
    /// Inverse by the adjugate (cofactor) method.
    ///
    /// Returns [`NumericsError::SingularMatrix`] when the determinant is
    /// exactly zero.
    pub fn inverse_clone(&self) -> Result<Self> {
        let cofactors = self.cofactor_vector();
        let determinant = self.rows[0].dot(&cofactors);
        if determinant == T::ZERO {
            return singular(determinant.to_f64());
        }
        let s = T::ONE / determinant;

        Ok(Self::from_rows(
            Vector3::new(
                cofactors.x * s,
                self.cofactor(0, 2, 2, 1) * s,
                self.cofactor(0, 1, 1, 2) * s,
            ),
            Vector3::new(
                cofactors.y * s,
                self.cofactor(0, 0, 2, 2) * s,
                self.cofactor(0, 2, 1, 0) * s,
            ),
            Vector3::new(
                cofactors.z * s,
                self.cofactor(0, 1, 2, 0) * s,
                self.cofactor(0, 0, 1, 1) * s,
            ),
        ))
    }

    /// Inverts this matrix in place. Left untouched on error.
    pub fn inverse_self(&mut self) -> Result<&mut Self> {
        *self = self.inverse_clone()?;
        Ok(self)
    }
}

/// 2x2 minors of the upper and lower row pairs, shared by the 4x4
/// determinant and inverse.
struct Minors4<T> {
    s: [T; 6],
    c: [T; 6],
}

impl<T: Scalar> Matrix4x4<T> {
    fn minors(&self) -> Minors4<T> {
        let a = &self.rows;
        Minors4 {
            s: [
                a[0][0] * a[1][1] - a[1][0] * a[0][1],
                a[0][0] * a[1][2] - a[1][0] * a[0][2],
                a[0][0] * a[1][3] - a[1][0] * a[0][3],
                a[0][1] * a[1][2] - a[1][1] * a[0][2],
                a[0][1] * a[1][3] - a[1][1] * a[0][3],
                a[0][2] * a[1][3] - a[1][2] * a[0][3],
            ],
            c: [
                a[2][0] * a[3][1] - a[3][0] * a[2][1],
                a[2][0] * a[3][2] - a[3][0] * a[2][2],
                a[2][0] * a[3][3] - a[3][0] * a[2][3],
                a[2][1] * a[3][2] - a[3][1] * a[2][2],
                a[2][1] * a[3][3] - a[3][1] * a[2][3],
                a[2][2] * a[3][3] - a[3][2] * a[2][3],
            ],
        }
    }

    fn determinant_from(minors: &Minors4<T>) -> T {
        let Minors4 { s, c } = minors;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    pub fn determinant(&self) -> T {
        Self::determinant_from(&self.minors())
    }
}

impl<T: FloatingPoint> Matrix4x4<T> {
    /// Inverse by Laplace expansion over 2x2 minors.
    ///
    /// Returns [`NumericsError::SingularMatrix`] when the determinant is
    /// exactly zero.
    pub fn inverse_clone(&self) -> Result<Self> {
        let minors = self.minors();
        let determinant = Self::determinant_from(&minors);
        if determinant == T::ZERO {
            return singular(determinant.to_f64());
        }
        let inv = T::ONE / determinant;
        let a = &self.rows;
        let Minors4 { s, c } = minors;

        Ok(Self::from_rows(
            Vector4::new(
                a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3],
                -a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3],
                a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3],
                -a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3],
            ) * inv,
            Vector4::new(
                -a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1],
                a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1],
                -a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1],
                a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1],
            ) * inv,
            Vector4::new(
                a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0],
                -a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0],
                a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0],
                -a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0],
            ) * inv,
            Vector4::new(
                -a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0],
                a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0],
                -a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0],
                a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0],
            ) * inv,
        ))
    }

    /// Inverts this matrix in place. Left untouched on error.
    pub fn inverse_self(&mut self) -> Result<&mut Self> {
        *self = self.inverse_clone()?;
        Ok(self)
    }
}

/// Matrices that can be inverted.
pub trait Invertible: Sized {
    fn inverse_clone(&self) -> Result<Self>;
}

impl<T: FloatingPoint> Invertible for Matrix3x3<T> {
    fn inverse_clone(&self) -> Result<Self> {
        Matrix3x3::inverse_clone(self)
    }
}

impl<T: FloatingPoint> Invertible for Matrix4x4<T> {
    fn inverse_clone(&self) -> Result<Self> {
        Matrix4x4::inverse_clone(self)
    }
}

/// Inverse of `m`, or [`NumericsError::SingularMatrix`].
pub fn inverse<M: Invertible>(m: &M) -> Result<M> {
    m.inverse_clone()
}
