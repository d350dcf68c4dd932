// src/numerics/error.rs
// Error type shared by every fallible numerics operation.

/// Errors reported by the numerics types when an operation's precondition
/// does not hold.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("Singular matrix: determinant is {determinant}, no inverse exists")]
    SingularMatrix { determinant: f64 },

    #[error("Zero-length axis: a rotation axis must have non-zero length")]
    ZeroLengthAxis,

    #[error("Zero-length vector: cannot normalize a vector of length 0")]
    ZeroLengthVector,

    #[error("Degenerate projection: {reason}")]
    DegenerateProjection { reason: String },

    #[error("Invalid swizzle pattern '{pattern}' for a {dimension}-component vector")]
    InvalidSwizzle { pattern: String, dimension: usize },

    #[error("Index out of range: {index} is not below dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },
}

/// Result alias used throughout the numerics module.
pub type Result<T> = std::result::Result<T, NumericsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NumericsError::SingularMatrix { determinant: 0.0 };
        assert_eq!(
            err.to_string(),
            "Singular matrix: determinant is 0, no inverse exists"
        );

        let err = NumericsError::InvalidSwizzle {
            pattern: "xq".to_string(),
            dimension: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid swizzle pattern 'xq' for a 2-component vector"
        );

        let err = NumericsError::IndexOutOfRange { index: 4, dimension: 3 };
        assert!(err.to_string().contains("4"));
    }
}
