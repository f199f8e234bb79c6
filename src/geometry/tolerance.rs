// ============================================================================
// Comparison Tolerances
// Configuration for the approximate geometric predicates
// ============================================================================

use crate::numeric::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerances used by [`Vector::is_orthogonal_with`] and
/// [`Vector::is_parallel_with`].
///
/// [`Vector::is_orthogonal_with`]: crate::geometry::Vector::is_orthogonal_with
/// [`Vector::is_parallel_with`]: crate::geometry::Vector::is_parallel_with
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerances {
    /// Largest absolute dot product still considered orthogonal (exclusive)
    pub orthogonal: Scalar,

    /// Largest distance in radians from 0 or π still considered parallel
    /// (exclusive)
    pub parallel_radians: f64,
}

impl Tolerances {
    /// Default bound for `|v · w|`: 1e-10
    pub const DEFAULT_ORTHOGONAL: Scalar = Scalar::from_parts(1, 0, 0, false, 10);

    /// Default angular bound: 1e-10 rad
    pub const DEFAULT_PARALLEL_RADIANS: f64 = 1e-10;

    pub fn new(orthogonal: Scalar, parallel_radians: f64) -> Self {
        Self {
            orthogonal,
            parallel_radians,
        }
    }

    /// Builder method: Set orthogonality tolerance
    pub fn with_orthogonal(mut self, tolerance: Scalar) -> Self {
        self.orthogonal = tolerance;
        self
    }

    /// Builder method: Set parallelism tolerance in radians
    pub fn with_parallel_radians(mut self, tolerance: f64) -> Self {
        self.parallel_radians = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.orthogonal <= Scalar::ZERO {
            return Err("Orthogonal tolerance must be positive".to_string());
        }

        if !self.parallel_radians.is_finite() || self.parallel_radians <= 0.0 {
            return Err("Parallel tolerance must be positive and finite".to_string());
        }

        Ok(())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ORTHOGONAL, Self::DEFAULT_PARALLEL_RADIANS)
    }
}
