// ============================================================================
// Decimal Vector Library
// Immutable geometric vectors with decimal-precision coordinates
// ============================================================================

//! # Decimal Vector
//!
//! Fixed-dimension geometric vectors whose coordinates are stored as
//! [`rust_decimal::Decimal`] instead of binary floating point.
//!
//! ## Features
//!
//! - **Immutable values**: every operation returns a new [`Vector`](geometry::Vector)
//! - **Checked arithmetic**: dimension mismatches and decimal overflow are
//!   reported as [`VectorError`](geometry::VectorError), never panics
//! - **Geometry**: dot/cross products, magnitude, normalization, angles,
//!   projections, orthogonality and parallelism tests
//!
//! ## Example
//!
//! ```rust
//! use decimal_vector::prelude::*;
//!
//! let x = Vector::new([1, 0, 0])?;
//! let y = Vector::new([0, 1, 0])?;
//!
//! assert_eq!(x.cross(&y)?, Vector::new([0, 0, 1])?);
//! assert!(x.is_orthogonal_to(&y)?);
//!
//! let degrees = x.angle_with(&y, AngleUnit::Degrees)?;
//! assert!((degrees - 90.0).abs() < 1e-9);
//!
//! assert_eq!(Vector::zero(3)?.normalized(), Err(VectorError::DivisionByZero));
//! # Ok::<(), VectorError>(())
//! ```

pub mod geometry;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::geometry::{
        AngleUnit, InvalidArgumentKind, Tolerances, Vector, VectorError, VectorResult,
    };
    pub use crate::numeric::{IntoScalar, Scalar};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_geometry() {
        let v = Vector::new([1, 2, 3]).unwrap();
        let w = Vector::new([4, 5, 6]).unwrap();

        assert_eq!(v.add(&w).unwrap(), Vector::new([5, 7, 9]).unwrap());
        assert_eq!(w.subtract(&v).unwrap(), Vector::new([3, 3, 3]).unwrap());
        assert_eq!(v.dot(&w).unwrap(), Scalar::from(32));
        assert_eq!(v.cross(&w).unwrap(), Vector::new([-3, 6, -3]).unwrap());

        // Cross product is orthogonal to both operands
        let normal = v.cross(&w).unwrap();
        assert!(normal.is_orthogonal_to(&v).unwrap());
        assert!(normal.is_orthogonal_to(&w).unwrap());

        // Projection splits v into parts that sum back to v
        let parallel = v.component_parallel_to(&w).unwrap();
        let orthogonal = v.component_orthogonal_to(&w).unwrap();
        assert!(parallel.is_parallel_to(&w).unwrap());
        assert!(orthogonal.is_orthogonal_to(&w).unwrap());
        assert!(parallel
            .add(&orthogonal)
            .unwrap()
            .approx_eq(&v, Scalar::new(1, 20)));
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let v = Arc::new(Vector::new([3, 4]).unwrap());
        let handles: Vec<_> = (1..=4)
            .map(|factor| {
                let v = Arc::clone(&v);
                std::thread::spawn(move || v.scale(factor).unwrap())
            })
            .collect();

        for (factor, handle) in (1..=4).zip(handles) {
            let scaled = handle.join().unwrap();
            assert_eq!(scaled, Vector::new([3 * factor, 4 * factor]).unwrap());
        }
        assert_eq!(*v, Vector::new([3, 4]).unwrap());
    }
}
