// src/numerics/types/swizzle.rs
// Generic swizzle accessors: one parameterized method per output size instead
// of an accessor per permutation.

use core::ops::Index;

use super::traits::Scalar;
use super::vector::{Vector2, Vector3, Vector4};
use crate::numerics::error::{NumericsError, Result};

/// Read-only rearrangement of a vector's components into a new vector.
///
/// Indices refer to components in storage order (`x = 0`, `y = 1`, ...).
/// Out-of-range indices panic like any other vector index.
pub trait Swizzle<T: Scalar>: Index<usize, Output = T> {
    /// Number of components of the source vector.
    const DIMENSION: usize;

    /// Accessor letters accepted by the `swizzle_pattern*` methods, each
    /// paired with the component it names.
    const NAMES: &'static [(char, usize)];

    fn swizzle2(&self, indices: [usize; 2]) -> Vector2<T> {
        Vector2::new(self[indices[0]], self[indices[1]])
    }

    fn swizzle3(&self, indices: [usize; 3]) -> Vector3<T> {
        Vector3::new(self[indices[0]], self[indices[1]], self[indices[2]])
    }

    fn swizzle4(&self, indices: [usize; 4]) -> Vector4<T> {
        Vector4::new(
            self[indices[0]],
            self[indices[1]],
            self[indices[2]],
            self[indices[3]],
        )
    }

    /// Swizzle by accessor names, e.g. `"yx"` or `"ar"`.
    fn swizzle_pattern2(&self, pattern: &str) -> Result<Vector2<T>> {
        Ok(self.swizzle2(parse_pattern::<2>(pattern, Self::NAMES, Self::DIMENSION)?))
    }

    /// Swizzle by accessor names, e.g. `"zyx"` or `"bgr"`.
    fn swizzle_pattern3(&self, pattern: &str) -> Result<Vector3<T>> {
        Ok(self.swizzle3(parse_pattern::<3>(pattern, Self::NAMES, Self::DIMENSION)?))
    }

    /// Swizzle by accessor names, e.g. `"wzyx"` or `"bgra"`.
    fn swizzle_pattern4(&self, pattern: &str) -> Result<Vector4<T>> {
        Ok(self.swizzle4(parse_pattern::<4>(pattern, Self::NAMES, Self::DIMENSION)?))
    }
}

fn parse_pattern<const N: usize>(
    pattern: &str,
    names: &[(char, usize)],
    dimension: usize,
) -> Result<[usize; N]> {
    let invalid = || NumericsError::InvalidSwizzle {
        pattern: pattern.to_string(),
        dimension,
    };

    let mut indices = [0; N];
    let mut count = 0;
    for letter in pattern.chars() {
        if count == N {
            return Err(invalid());
        }
        let (_, index) = names
            .iter()
            .find(|(name, _)| *name == letter)
            .ok_or_else(invalid)?;
        indices[count] = *index;
        count += 1;
    }

    if count != N {
        return Err(invalid());
    }
    Ok(indices)
}

impl<T: Scalar> Swizzle<T> for Vector2<T> {
    const DIMENSION: usize = 2;
    const NAMES: &'static [(char, usize)] = &[
        ('x', 0),
        ('y', 1),
        ('r', 0),
        ('a', 1),
        ('u', 0),
        ('v', 1),
    ];
}

impl<T: Scalar> Swizzle<T> for Vector3<T> {
    const DIMENSION: usize = 3;
    const NAMES: &'static [(char, usize)] = &[
        ('x', 0),
        ('y', 1),
        ('z', 2),
        ('r', 0),
        ('g', 1),
        ('b', 2),
    ];
}

impl<T: Scalar> Swizzle<T> for Vector4<T> {
    const DIMENSION: usize = 4;
    const NAMES: &'static [(char, usize)] = &[
        ('x', 0),
        ('y', 1),
        ('z', 2),
        ('w', 3),
        ('r', 0),
        ('g', 1),
        ('b', 2),
        ('a', 3),
    ];
}
