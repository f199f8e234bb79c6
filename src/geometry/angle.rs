// ============================================================================
// Angles and Directional Predicates
// Angle between vectors, orthogonality and parallelism checks
// ============================================================================

use super::errors::{InvalidArgumentKind, VectorError, VectorResult};
use super::tolerance::Tolerances;
use super::vector::Vector;
use crate::numeric::{scalar_to_f64, Scalar};

/// Unit an angle is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    #[inline]
    fn convert(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
}

impl Vector {
    /// Angle between `self` and `other`, in `[0, π]` radians or `[0, 180]`
    /// degrees.
    ///
    /// Equal to `acos` of the cosine between the two directions, clamped to
    /// `[-1, 1]`. The result is taken as `atan2(sin, cos)` with both terms
    /// computed in decimal, which stays accurate down to ~1e-27 rad near 0
    /// and π where `acos` of an `f64` collapses below ~1e-8 rad.
    ///
    /// # Errors
    /// - `ZeroVectorAngle` if either operand is the zero vector
    /// - `DimensionMismatch` if the dimensions differ
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> VectorResult<f64> {
        let (cosine, sine) = self.cosine_and_sine(other)?;
        Ok(unit.convert(sine.atan2(cosine)))
    }

    /// `|self · other| < 1e-10`.
    ///
    /// The zero vector is orthogonal to everything.
    pub fn is_orthogonal_to(&self, other: &Vector) -> VectorResult<bool> {
        self.is_orthogonal_with(other, &Tolerances::default())
    }

    /// `|self · other| < tolerances.orthogonal`.
    ///
    /// # Errors
    /// - `InvalidArgument(Tolerance)` if `tolerances` does not validate
    /// - `DimensionMismatch` if the dimensions differ
    pub fn is_orthogonal_with(
        &self,
        other: &Vector,
        tolerances: &Tolerances,
    ) -> VectorResult<bool> {
        check_tolerances(tolerances)?;
        Ok(self.dot(other)?.abs() < tolerances.orthogonal)
    }

    /// True if either vector is zero, or the angle between them is within
    /// 1e-10 rad of 0 or π.
    pub fn is_parallel_to(&self, other: &Vector) -> VectorResult<bool> {
        self.is_parallel_with(other, &Tolerances::default())
    }

    /// True if either vector is zero, or the angle between them is within
    /// `tolerances.parallel_radians` of 0 or π.
    ///
    /// # Errors
    /// - `InvalidArgument(Tolerance)` if `tolerances` does not validate
    /// - `DimensionMismatch` if the dimensions differ
    pub fn is_parallel_with(&self, other: &Vector, tolerances: &Tolerances) -> VectorResult<bool> {
        check_tolerances(tolerances)?;
        self.ensure_same_dimension(other)?;

        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }

        // Distance to the nearer of 0 and π, without subtracting from π.
        let (cosine, sine) = self.cosine_and_sine(other)?;
        let deviation = sine.atan2(cosine.abs());
        Ok(deviation < tolerances.parallel_radians)
    }

    /// Cosine and sine of the angle between two non-zero vectors.
    ///
    /// The sine is the length of the rejection `u1 - (u1 · u2) u2` of the
    /// unit vectors, so it keeps its digits where `1 - cos` underflows.
    fn cosine_and_sine(&self, other: &Vector) -> VectorResult<(f64, f64)> {
        self.ensure_same_dimension(other)?;

        let u1 = self.normalized().map_err(zero_vector_angle)?;
        let u2 = other.normalized().map_err(zero_vector_angle)?;

        let cosine = u1.dot(&u2)?.clamp(Scalar::NEGATIVE_ONE, Scalar::ONE);
        let sine = u1.subtract(&u2.scale(cosine)?)?.magnitude()?;

        let cosine = scalar_to_f64(cosine).ok_or(VectorError::Overflow)?;
        let sine = scalar_to_f64(sine).ok_or(VectorError::Overflow)?;
        Ok((cosine, sine))
    }
}

fn zero_vector_angle(err: VectorError) -> VectorError {
    match err {
        VectorError::DivisionByZero => VectorError::ZeroVectorAngle,
        other => other,
    }
}

fn check_tolerances(tolerances: &Tolerances) -> VectorResult<()> {
    tolerances.validate().map_err(|reason| {
        tracing::debug!(%reason, "rejected tolerance configuration");
        VectorError::InvalidArgument(InvalidArgumentKind::Tolerance)
    })
}
