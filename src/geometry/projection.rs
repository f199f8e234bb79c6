// ============================================================================
// Projection
// Decomposition of a vector relative to a basis vector
// ============================================================================

use super::errors::{VectorError, VectorResult};
use super::vector::Vector;

impl Vector {
    /// Orthogonal projection of `self` onto `basis`.
    ///
    /// # Errors
    /// - `NoUniqueParallelComponent` if `basis` is the zero vector
    /// - `DimensionMismatch` if the dimensions differ
    pub fn component_parallel_to(&self, basis: &Vector) -> VectorResult<Vector> {
        self.ensure_same_dimension(basis)?;

        let unit = basis.normalized().map_err(|err| match err {
            VectorError::DivisionByZero => VectorError::NoUniqueParallelComponent,
            other => other,
        })?;
        let weight = self.dot(&unit)?;

        unit.scale(weight)
    }

    /// Component of `self` orthogonal to `basis`:
    /// `self - self.component_parallel_to(basis)`.
    ///
    /// # Errors
    /// Same as [`Vector::component_parallel_to`].
    pub fn component_orthogonal_to(&self, basis: &Vector) -> VectorResult<Vector> {
        let projection = self.component_parallel_to(basis)?;
        self.subtract(&projection)
    }
}
