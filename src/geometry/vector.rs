// ============================================================================
// Vector Value Type
// Immutable fixed-dimension vectors with decimal coordinates
// ============================================================================

use super::errors::{InvalidArgumentKind, VectorError, VectorResult};
use crate::numeric::{IntoScalar, Scalar};
use rust_decimal::MathematicalOps;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinate storage. 2D and 3D vectors stay inline.
type Coordinates = SmallVec<[Scalar; 3]>;

/// Geometric vector with decimal-precision coordinates.
///
/// A `Vector` always has at least one coordinate and never changes after
/// construction: every operation returns a new value. Binary operations
/// require operands of the same dimension and fail with
/// [`VectorError::DimensionMismatch`] otherwise.
///
/// # Example
/// ```
/// use decimal_vector::prelude::*;
///
/// let v = Vector::new([1, 2, 3])?;
/// let w = Vector::new([4, 5, 6])?;
///
/// assert_eq!(v.add(&w)?, Vector::new([5, 7, 9])?);
/// assert_eq!(v.dot(&w)?, Scalar::from(32));
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Scalar>", into = "Vec<Scalar>")
)]
pub struct Vector {
    coordinates: Coordinates,
    dimension: usize,
}

impl Vector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector from any sequence of decimal-coercible values.
    ///
    /// # Errors
    /// - `InvalidArgument(Empty)` if the sequence is empty
    /// - `InvalidArgument(NonNumeric)` if an element has no decimal value
    ///   (NaN, infinity, unparsable string)
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|c| c.into_scalar())
            .collect::<Option<Coordinates>>()
            .ok_or_else(|| {
                tracing::debug!("rejected vector with non-numeric coordinate");
                VectorError::InvalidArgument(InvalidArgumentKind::NonNumeric)
            })?;

        Self::from_coordinates(coordinates)
    }

    /// Create a vector from decimals that are already in their final form.
    ///
    /// # Errors
    /// Returns `InvalidArgument(Empty)` if `coordinates` is empty.
    pub fn from_decimals(coordinates: Vec<Scalar>) -> VectorResult<Self> {
        Self::from_coordinates(Coordinates::from_vec(coordinates))
    }

    /// Create the zero vector of the given dimension.
    ///
    /// # Errors
    /// Returns `InvalidArgument(Empty)` if `dimension` is zero.
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::from_coordinates(SmallVec::from_elem(Scalar::ZERO, dimension))
    }

    fn from_coordinates(coordinates: Coordinates) -> VectorResult<Self> {
        if coordinates.is_empty() {
            tracing::debug!("rejected vector with no coordinates");
            return Err(VectorError::InvalidArgument(InvalidArgumentKind::Empty));
        }

        let dimension = coordinates.len();
        Ok(Self {
            coordinates,
            dimension,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn coordinates(&self) -> &[Scalar] {
        &self.coordinates
    }

    /// Coordinate at `index`, or `None` past the last dimension.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.coordinates.get(index).copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.coordinates.iter()
    }

    /// Check if every coordinate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coordinates.iter().all(|c| c.is_zero())
    }

    /// Element-wise comparison allowing `|a - b| <= tolerance` per coordinate.
    ///
    /// Vectors of different dimension are never approximately equal.
    pub fn approx_eq(&self, other: &Vector, tolerance: Scalar) -> bool {
        self.dimension == other.dimension
            && self
                .coordinates
                .iter()
                .zip(other.coordinates.iter())
                .all(|(a, b)| {
                    a.checked_sub(*b)
                        .map(|diff| diff.abs() <= tolerance)
                        .unwrap_or(false)
                })
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Component-wise sum.
    ///
    /// # Errors
    /// `DimensionMismatch` or `Overflow`.
    pub fn add(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, "add", |a, b| a.checked_add(b))
    }

    /// Component-wise difference `self - other`.
    ///
    /// # Errors
    /// `DimensionMismatch` or `Overflow`.
    pub fn subtract(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, "subtract", |a, b| a.checked_sub(b))
    }

    /// Multiply every coordinate by `scalar`.
    ///
    /// # Errors
    /// - `InvalidArgument(NonNumeric)` if `scalar` has no decimal value
    /// - `Overflow` if a product exceeds the decimal range
    pub fn scale<S: IntoScalar>(&self, scalar: S) -> VectorResult<Vector> {
        let factor = scalar.into_scalar().ok_or_else(|| {
            tracing::debug!("rejected non-numeric scale factor");
            VectorError::InvalidArgument(InvalidArgumentKind::NonNumeric)
        })?;

        let coordinates = self
            .coordinates
            .iter()
            .map(|c| c.checked_mul(factor))
            .collect::<Option<Coordinates>>()
            .ok_or_else(|| overflow("scale"))?;

        Self::from_coordinates(coordinates)
    }

    /// The vector pointing the opposite way.
    pub fn negated(&self) -> Vector {
        Self {
            coordinates: self.coordinates.iter().map(|c| -*c).collect(),
            dimension: self.dimension,
        }
    }

    /// Sum of component-wise products.
    ///
    /// # Errors
    /// `DimensionMismatch` or `Overflow`.
    pub fn dot(&self, other: &Vector) -> VectorResult<Scalar> {
        self.ensure_same_dimension(other)?;

        self.coordinates
            .iter()
            .zip(other.coordinates.iter())
            .try_fold(Scalar::ZERO, |acc, (a, b)| {
                a.checked_mul(*b).and_then(|product| acc.checked_add(product))
            })
            .ok_or_else(|| overflow("dot"))
    }

    /// Euclidean length, `sqrt(self · self)`.
    ///
    /// Non-zero for every vector that is not the zero vector, including ones
    /// whose squared coordinates fall below the decimal resolution.
    ///
    /// # Errors
    /// Returns `Overflow` if the length exceeds the decimal range.
    pub fn magnitude(&self) -> VectorResult<Scalar> {
        let (largest, root) = self.scaled_norm()?;
        root.checked_mul(largest)
            .ok_or_else(|| overflow("magnitude"))
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for the zero vector.
    pub fn normalized(&self) -> VectorResult<Vector> {
        let (largest, root) = self.scaled_norm()?;
        if largest.is_zero() {
            tracing::debug!(dimension = self.dimension, "cannot normalize the zero vector");
            return Err(VectorError::DivisionByZero);
        }

        // Divide in ratio space so tiny vectors keep all their digits.
        let coordinates = self
            .coordinates
            .iter()
            .map(|c| c.checked_div(largest)?.checked_div(root))
            .collect::<Option<Coordinates>>()
            .ok_or_else(|| overflow("normalized"))?;

        Self::from_coordinates(coordinates)
    }

    /// 3D cross product `self × other`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch { expected: 3, .. }` unless both operands
    /// are three-dimensional.
    pub fn cross(&self, other: &Vector) -> VectorResult<Vector> {
        for operand in [self, other] {
            if operand.dimension != 3 {
                tracing::debug!(
                    found = operand.dimension,
                    "cross product requires three dimensions"
                );
                return Err(VectorError::DimensionMismatch {
                    expected: 3,
                    found: operand.dimension,
                });
            }
        }

        let (x1, y1, z1) = (self[0], self[1], self[2]);
        let (x2, y2, z2) = (other[0], other[1], other[2]);

        let coordinates: Coordinates = [
            determinant(y1, z1, y2, z2),
            determinant(z1, x1, z2, x2),
            determinant(x1, y1, x2, y2),
        ]
        .into_iter()
        .collect::<Option<_>>()
        .ok_or_else(|| overflow("cross"))?;

        Self::from_coordinates(coordinates)
    }

    /// Area of the parallelogram spanned by two 3D vectors.
    pub fn area_of_parallelogram(&self, other: &Vector) -> VectorResult<Scalar> {
        self.cross(other)?.magnitude()
    }

    /// Area of the triangle spanned by two 3D vectors.
    pub fn area_of_triangle(&self, other: &Vector) -> VectorResult<Scalar> {
        let parallelogram = self.area_of_parallelogram(other)?;
        parallelogram
            .checked_div(Scalar::TWO)
            .ok_or_else(|| overflow("area_of_triangle"))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Largest absolute coordinate `m` and `r = sqrt(sum((c / m)^2))`, so
    /// that `|self| = m * r`. Both are zero only for the zero vector.
    ///
    /// Squaring the ratios instead of the coordinates keeps coordinates
    /// below 1e-14 from underflowing to zero.
    fn scaled_norm(&self) -> VectorResult<(Scalar, Scalar)> {
        let largest = self
            .coordinates
            .iter()
            .map(|c| c.abs())
            .max()
            .unwrap_or(Scalar::ZERO);
        if largest.is_zero() {
            return Ok((Scalar::ZERO, Scalar::ZERO));
        }

        let sum_of_squares = self
            .coordinates
            .iter()
            .try_fold(Scalar::ZERO, |acc, c| {
                let ratio = c.checked_div(largest)?;
                acc.checked_add(ratio.checked_mul(ratio)?)
            })
            .ok_or_else(|| overflow("magnitude"))?;

        // A single non-zero coordinate has an exact root.
        if sum_of_squares == Scalar::ONE {
            return Ok((largest, Scalar::ONE));
        }

        let root = sum_of_squares
            .sqrt()
            .ok_or_else(|| overflow("magnitude"))?;
        Ok((largest, root))
    }

    pub(crate) fn ensure_same_dimension(&self, other: &Vector) -> VectorResult<()> {
        if self.dimension == other.dimension {
            Ok(())
        } else {
            tracing::debug!(
                expected = self.dimension,
                found = other.dimension,
                "vector dimension mismatch"
            );
            Err(VectorError::DimensionMismatch {
                expected: self.dimension,
                found: other.dimension,
            })
        }
    }

    fn zip_with<F>(&self, other: &Vector, operation: &'static str, op: F) -> VectorResult<Vector>
    where
        F: Fn(Scalar, Scalar) -> Option<Scalar>,
    {
        self.ensure_same_dimension(other)?;

        let coordinates = self
            .coordinates
            .iter()
            .zip(other.coordinates.iter())
            .map(|(a, b)| op(*a, *b))
            .collect::<Option<Coordinates>>()
            .ok_or_else(|| overflow(operation))?;

        Self::from_coordinates(coordinates)
    }
}

/// `a * d - b * c`, or `None` on overflow.
#[inline]
fn determinant(a: Scalar, b: Scalar, c: Scalar, d: Scalar) -> Option<Scalar> {
    a.checked_mul(d)?.checked_sub(b.checked_mul(c)?)
}

fn overflow(operation: &'static str) -> VectorError {
    tracing::debug!(operation, "decimal overflow");
    VectorError::Overflow
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Index<usize> for Vector {
    type Output = Scalar;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Scalar>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<Scalar>) -> Result<Self, Self::Error> {
        Self::from_decimals(coordinates)
    }
}

impl From<Vector> for Vec<Scalar> {
    fn from(vector: Vector) -> Self {
        vector.coordinates.into_vec()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Vector {
    type Err = VectorError;

    /// Parse a comma-separated coordinate list.
    ///
    /// # Examples
    /// - "1, 2, 3"
    /// - "(1.5, -2)"
    /// - "Vector: (1, 2, 3)" (the `Display` form)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("Vector:").unwrap_or(s).trim();
        let s = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        if s.trim().is_empty() {
            return Err(VectorError::InvalidArgument(InvalidArgumentKind::Empty));
        }

        Self::new(s.split(','))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn v<const N: usize>(coords: [&str; N]) -> Vector {
        Vector::new(coords).unwrap()
    }

    fn assert_close(actual: Scalar, expected: &str) {
        let expected: Scalar = expected.parse().unwrap();
        let tolerance = Scalar::new(1, 8);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_new_sets_dimension() {
        let x = Vector::new([1, 2, 3]).unwrap();
        assert_eq!(x.dimension(), 3);
        assert_eq!(
            x.coordinates(),
            &[Scalar::from(1), Scalar::from(2), Scalar::from(3)]
        );

        let y = Vector::new(vec![0.5f64]).unwrap();
        assert_eq!(y.dimension(), 1);
        assert_eq!(y[0], Scalar::new(5, 1));
    }

    #[test]
    fn test_new_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(
            Vector::new(empty),
            Err(VectorError::InvalidArgument(InvalidArgumentKind::Empty))
        );
        assert_eq!(
            Vector::zero(0),
            Err(VectorError::InvalidArgument(InvalidArgumentKind::Empty))
        );
    }

    #[test]
    fn test_new_non_numeric() {
        assert_eq!(
            Vector::new([1.0, f64::NAN]),
            Err(VectorError::InvalidArgument(InvalidArgumentKind::NonNumeric))
        );
        assert_eq!(
            Vector::new(["1", "two"]),
            Err(VectorError::InvalidArgument(InvalidArgumentKind::NonNumeric))
        );
    }

    #[test]
    fn test_equality_is_exact_and_ordered() {
        assert_eq!(Vector::new([1, 2]).unwrap(), v(["1.0", "2.00"]));
        assert_ne!(Vector::new([1, 2]).unwrap(), Vector::new([2, 1]).unwrap());
        assert_ne!(Vector::new([1, 2]).unwrap(), Vector::new([1, 2, 0]).unwrap());
        assert_ne!(v(["1"]), v(["1.0000000001"]));
    }

    #[test]
    fn test_add_and_subtract() {
        let a = v(["8.218", "-9.341"]);
        let b = v(["-1.129", "2.111"]);
        assert_eq!(a.add(&b).unwrap(), v(["7.089", "-7.230"]));

        let c = v(["7.119", "8.215"]);
        let d = v(["-8.223", "0.878"]);
        assert_eq!(c.subtract(&d).unwrap(), v(["15.342", "7.337"]));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Vector::new([1, 2, 3]).unwrap();
        let b = Vector::new([1, 2]).unwrap();
        let expected = VectorError::DimensionMismatch {
            expected: 3,
            found: 2,
        };

        assert_eq!(a.add(&b), Err(expected));
        assert_eq!(a.subtract(&b), Err(expected));
        assert_eq!(a.dot(&b), Err(expected));
    }

    #[test]
    fn test_scale() {
        let a = v(["1.671", "-1.012", "-0.318"]);
        assert_eq!(
            a.scale(Scalar::new(7410, 3)).unwrap(),
            v(["12.38211", "-7.49892", "-2.35638"])
        );
        assert_eq!(a.scale(1).unwrap(), a);
        assert!(a.scale(0).unwrap().is_zero());
        assert_eq!(
            a.scale(f64::INFINITY),
            Err(VectorError::InvalidArgument(InvalidArgumentKind::NonNumeric))
        );
    }

    #[test]
    fn test_negated() {
        let a = Vector::new([1, -2, 0]).unwrap();
        assert_eq!(a.negated(), Vector::new([-1, 2, 0]).unwrap());
        assert_eq!(a.negated().negated(), a);
    }

    #[test]
    fn test_dot() {
        let a = v(["7.887", "4.138"]);
        let b = v(["-8.802", "6.776"]);
        assert_eq!(a.dot(&b).unwrap(), "-41.382286".parse::<Scalar>().unwrap());
        assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
    }

    #[test]
    fn test_magnitude() {
        assert_close(v(["-0.221", "7.437"]).magnitude().unwrap(), "7.440282924728");
        assert_close(
            v(["8.813", "-1.331", "-6.247"]).magnitude().unwrap(),
            "10.884187567292",
        );
        assert_close(Vector::new([3, 4]).unwrap().magnitude().unwrap(), "5");
        assert_eq!(Vector::zero(3).unwrap().magnitude().unwrap(), Scalar::ZERO);
    }

    #[test]
    fn test_normalized() {
        let unit = v(["5.581", "-2.136"]).normalized().unwrap();
        assert_close(unit[0], "0.933935214087");
        assert_close(unit[1], "-0.357442325262");
        assert_close(unit.magnitude().unwrap(), "1");
    }

    #[test]
    fn test_magnitude_near_decimal_range() {
        // Squares of these coordinates exceed the decimal range.
        let half = Scalar::MAX / Scalar::TWO;
        let big = Vector::new([half, half]).unwrap();
        let expected = half * "1.4142135623730950488016887242".parse::<Scalar>().unwrap();
        let magnitude = big.magnitude().unwrap();
        assert!((magnitude - expected).abs() / expected < Scalar::new(1, 20));

        let huge = Vector::new([Scalar::MAX, Scalar::ONE]).unwrap();
        assert_eq!(huge.magnitude().unwrap(), Scalar::MAX);
    }

    #[test]
    fn test_tiny_vector_is_not_zero() {
        // Squares of 1e-15 underflow the 28 fractional digits of a decimal.
        let tiny = v(["0.000000000000001", "0"]);
        assert!(!tiny.is_zero());
        assert_eq!(tiny.magnitude().unwrap(), Scalar::new(1, 15));
        assert_eq!(tiny.normalized().unwrap(), Vector::new([1, 0]).unwrap());

        let diagonal = v(["0.000000000000003", "-0.000000000000004"]);
        let magnitude = diagonal.magnitude().unwrap();
        assert!((magnitude - Scalar::new(5, 15)).abs() < Scalar::new(1, 27));
        assert!(diagonal
            .normalized()
            .unwrap()
            .approx_eq(&v(["0.6", "-0.8"]), Scalar::new(1, 20)));
    }

    #[test]
    fn test_smallest_decimal_normalizes() {
        let smallest = Scalar::new(1, 28);
        let v = Vector::new([smallest, smallest]).unwrap();
        assert!(!v.magnitude().unwrap().is_zero());

        let unit = v.normalized().unwrap();
        assert!((unit.magnitude().unwrap() - Scalar::ONE).abs() < Scalar::new(1, 20));
    }

    #[test]
    fn test_normalized_zero_vector() {
        let zero = Vector::zero(2).unwrap();
        assert_eq!(zero.normalized(), Err(VectorError::DivisionByZero));
    }

    #[test]
    fn test_cross() {
        let a = v(["8.462", "7.893", "-8.187"]);
        let b = v(["6.984", "-5.975", "4.778"]);
        assert_eq!(
            a.cross(&b).unwrap(),
            v(["-11.204571", "-97.609444", "-105.685162"])
        );

        let x = Vector::new([1, 0, 0]).unwrap();
        let y = Vector::new([0, 1, 0]).unwrap();
        assert_eq!(x.cross(&y).unwrap(), Vector::new([0, 0, 1]).unwrap());
        assert_eq!(y.cross(&x).unwrap(), Vector::new([0, 0, -1]).unwrap());
    }

    #[test]
    fn test_cross_requires_three_dimensions() {
        let planar = Vector::new([1, 2]).unwrap();
        let spatial = Vector::new([1, 2, 3]).unwrap();
        assert_eq!(
            planar.cross(&spatial),
            Err(VectorError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            spatial.cross(&Vector::new([1, 2, 3, 4]).unwrap()),
            Err(VectorError::DimensionMismatch {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn test_areas() {
        let a = v(["-8.987", "-9.838", "5.031"]);
        let b = v(["-4.268", "-1.861", "-8.866"]);
        assert_close(a.area_of_parallelogram(&b).unwrap(), "142.122221402");

        let c = v(["1.5", "9.547", "3.691"]);
        let d = v(["-6.007", "0.124", "5.772"]);
        assert_close(c.area_of_triangle(&d).unwrap(), "42.564937399");

        let x = Vector::new([1, 0, 0]).unwrap();
        let y = Vector::new([0, 1, 0]).unwrap();
        assert_close(x.area_of_parallelogram(&y).unwrap(), "1");
        assert_close(x.area_of_triangle(&y).unwrap(), "0.5");
    }

    #[test]
    fn test_overflow() {
        let huge = Vector::new([Scalar::MAX, Scalar::ONE]).unwrap();
        assert_eq!(huge.add(&huge), Err(VectorError::Overflow));
        assert_eq!(huge.scale(2), Err(VectorError::Overflow));
        assert_eq!(huge.dot(&huge), Err(VectorError::Overflow));
        assert_eq!(
            Vector::new([Scalar::MAX, Scalar::MAX]).unwrap().magnitude(),
            Err(VectorError::Overflow)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Vector::new([1, 2, 3]).unwrap().to_string(),
            "Vector: (1, 2, 3)"
        );
        assert_eq!(v(["-0.5"]).to_string(), "Vector: (-0.5)");
    }

    #[test]
    fn test_from_str() {
        let expected = Vector::new([1, 2, 3]).unwrap();
        assert_eq!("1, 2, 3".parse::<Vector>().unwrap(), expected);
        assert_eq!("(1,2,3)".parse::<Vector>().unwrap(), expected);
        assert_eq!(expected.to_string().parse::<Vector>().unwrap(), expected);
        assert_eq!("(-1.5)".parse::<Vector>().unwrap(), v(["-1.5"]));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "()".parse::<Vector>(),
            Err(VectorError::InvalidArgument(InvalidArgumentKind::Empty))
        );
        assert_eq!(
            "1,,2".parse::<Vector>(),
            Err(VectorError::InvalidArgument(InvalidArgumentKind::NonNumeric))
        );
    }

    #[test]
    fn test_approx_eq() {
        let a = v(["1", "2"]);
        let b = v(["1.0000000001", "1.9999999999"]);
        assert!(a.approx_eq(&b, Scalar::new(1, 9)));
        assert!(!a.approx_eq(&b, Scalar::new(1, 11)));
        assert!(!a.approx_eq(&v(["1", "2", "0"]), Scalar::ONE));
    }

    #[test]
    fn test_operations_do_not_mutate() {
        let a = Vector::new([1, 2, 3]).unwrap();
        let snapshot = a.clone();
        let _ = a.add(&a).unwrap();
        let _ = a.scale(5).unwrap();
        let _ = a.normalized().unwrap();
        assert_eq!(a, snapshot);
    }

    #[test]
    fn test_vec_conversions() {
        let coords = vec![Scalar::ONE, Scalar::TWO];
        let a = Vector::try_from(coords.clone()).unwrap();
        assert_eq!(Vec::from(a), coords);
        assert!(Vector::try_from(Vec::new()).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_revalidates() {
        let a = v(["1.5", "-2"]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(serde_json::from_str::<Vector>(&json).unwrap(), a);
        assert!(serde_json::from_str::<Vector>("[]").is_err());
    }
}
