// ============================================================================
// Vector Errors
// Error types for vector construction and geometric operations
// ============================================================================

use std::fmt;

/// Why an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidArgumentKind {
    /// No coordinates were supplied
    Empty,
    /// A coordinate or scalar could not be coerced to a decimal
    NonNumeric,
    /// A comparison tolerance was not positive and finite
    Tolerance,
}

/// Errors that can occur while building or operating on vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Constructor or scalar argument rejected
    InvalidArgument(InvalidArgumentKind),
    /// Attempted to normalize the zero vector
    DivisionByZero,
    /// Attempted to measure an angle against the zero vector
    ZeroVectorAngle,
    /// Attempted to project onto the zero vector
    NoUniqueParallelComponent,
    /// Operands have different dimensions
    DimensionMismatch { expected: usize, found: usize },
    /// Decimal result outside the representable range
    Overflow,
}

impl fmt::Display for InvalidArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgumentKind::Empty => write!(f, "the coordinates must be nonempty"),
            InvalidArgumentKind::NonNumeric => {
                write!(f, "the coordinates must be decimal-coercible numbers")
            },
            InvalidArgumentKind::Tolerance => {
                write!(f, "the tolerance must be positive and finite")
            },
        }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidArgument(kind) => write!(f, "invalid argument: {}", kind),
            VectorError::DivisionByZero => write!(f, "cannot normalize the zero vector"),
            VectorError::ZeroVectorAngle => {
                write!(f, "cannot compute an angle with the zero vector")
            },
            VectorError::NoUniqueParallelComponent => {
                write!(f, "no unique parallel component: basis is the zero vector")
            },
            VectorError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {} coordinates, found {}",
                expected, found
            ),
            VectorError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
        }
    }
}

impl std::error::Error for VectorError {}

impl From<InvalidArgumentKind> for VectorError {
    #[inline]
    fn from(kind: InvalidArgumentKind) -> Self {
        VectorError::InvalidArgument(kind)
    }
}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;
