// ============================================================================
// Scalar Coercion
// Conversion of numeric inputs into decimal coordinates
// ============================================================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Decimal type used for every coordinate and scalar result.
///
/// 96-bit mantissa with up to 28 decimal places, so chained additions and
/// multiplications do not accumulate binary rounding error.
pub type Scalar = Decimal;

/// Values that can be coerced into a [`Scalar`].
///
/// Returns `None` when the value has no decimal representation: NaN or
/// infinite floats, floats outside the decimal range, and strings that are
/// not decimal or scientific notation.
///
/// # Example
/// ```
/// use decimal_vector::numeric::IntoScalar;
/// use rust_decimal::Decimal;
///
/// assert_eq!(3i32.into_scalar(), Some(Decimal::from(3)));
/// assert_eq!("2.5".into_scalar(), Some(Decimal::new(25, 1)));
/// assert_eq!(f64::NAN.into_scalar(), None);
/// ```
pub trait IntoScalar {
    fn into_scalar(self) -> Option<Scalar>;
}

macro_rules! impl_into_scalar_lossless {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoScalar for $t {
                #[inline]
                fn into_scalar(self) -> Option<Scalar> {
                    Some(Decimal::from(self))
                }
            }

            impl IntoScalar for &$t {
                #[inline]
                fn into_scalar(self) -> Option<Scalar> {
                    Some(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_into_scalar_lossless!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoScalar for i128 {
    #[inline]
    fn into_scalar(self) -> Option<Scalar> {
        Decimal::from_i128(self)
    }
}

impl IntoScalar for u128 {
    #[inline]
    fn into_scalar(self) -> Option<Scalar> {
        Decimal::from_u128(self)
    }
}

impl IntoScalar for f64 {
    #[inline]
    fn into_scalar(self) -> Option<Scalar> {
        scalar_from_f64(self)
    }
}

impl IntoScalar for &f64 {
    #[inline]
    fn into_scalar(self) -> Option<Scalar> {
        scalar_from_f64(*self)
    }
}

impl IntoScalar for f32 {
    #[inline]
    fn into_scalar(self) -> Option<Scalar> {
        if self.is_finite() {
            Decimal::from_f32(self)
        } else {
            None
        }
    }
}

impl IntoScalar for Decimal {
    #[inline]
    fn into_scalar(self) -> Option<Scalar> {
        Some(self)
    }
}

impl IntoScalar for &Decimal {
    #[inline]
    fn into_scalar(self) -> Option<Scalar> {
        Some(*self)
    }
}

impl IntoScalar for &str {
    /// Accepts plain decimals ("-0.125") and scientific notation ("1.5e-3").
    fn into_scalar(self) -> Option<Scalar> {
        let s = self.trim();
        if s.is_empty() {
            return None;
        }

        Decimal::from_str(s)
            .ok()
            .or_else(|| Decimal::from_scientific(s).ok())
    }
}

impl IntoScalar for String {
    #[inline]
    fn into_scalar(self) -> Option<Scalar> {
        self.as_str().into_scalar()
    }
}

impl IntoScalar for &String {
    #[inline]
    fn into_scalar(self) -> Option<Scalar> {
        self.as_str().into_scalar()
    }
}

/// Convert an `f64` into a decimal, rejecting NaN and infinities.
#[inline]
pub fn scalar_from_f64(value: f64) -> Option<Scalar> {
    if value.is_finite() {
        Decimal::from_f64(value)
    } else {
        None
    }
}

/// Convert a decimal into the nearest `f64`.
#[inline]
pub fn scalar_to_f64(value: Scalar) -> Option<f64> {
    value.to_f64()
}
