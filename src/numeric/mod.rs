// ============================================================================
// Numeric Module
// Decimal scalars and coercion of plain numbers into them
// ============================================================================
//
// This module provides:
// - Scalar: the decimal type every vector coordinate is stored as
// - IntoScalar: lossless coercion of integers, floats, decimals and strings
// - Bridges between Scalar and f64 for trigonometry
//
// Design principles:
// - Coordinates never pass through f64 on the way in
// - Non-finite or unparsable inputs are rejected, never approximated
// - f64 is only used for inverse cosine, which Decimal does not provide

mod scalar;

pub use scalar::{scalar_from_f64, scalar_to_f64, IntoScalar, Scalar};
