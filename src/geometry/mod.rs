// ============================================================================
// Geometry Module
// The Vector value type and the operations defined on it
// ============================================================================

mod angle;
mod errors;
mod projection;
mod tolerance;
mod vector;

pub use angle::AngleUnit;
pub use errors::{InvalidArgumentKind, VectorError, VectorResult};
pub use tolerance::Tolerances;
pub use vector::Vector;
