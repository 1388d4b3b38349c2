//! Optional integer coercion.
//!
//! [`int_or_none`] is used when parsing sample information out of image
//! filenames, where a missing field stays missing and a present one must be
//! an integer.
//!
//! Conversion rules by input type:
//!
//! | Input | Rule | Error |
//! |-------|------|-------|
//! | `bool`, `i8`..`i64`, `u8`..`u32` | exact | `Infallible` |
//! | `isize`, `usize`, `u64`, `i128`, `u128` | exact when in range | [`TryFromIntError`] |
//! | `f32`, `f64` | truncate toward zero | [`FloatToIntError`] |
//! | `&str`, `String` | trim whitespace, parse decimal | [`ParseIntError`] |
//!
//! Errors are returned exactly as the conversion produced them.

use std::convert::Infallible;
use std::num::{ParseIntError, TryFromIntError};

use crate::error::FloatToIntError;

/// A value that can be coerced to an `i64`.
pub trait ToInt {
    /// Error produced when the value has no integer representation.
    type Error;

    /// Convert the value to an `i64`.
    fn to_int(self) -> Result<i64, Self::Error>;
}

/// Returns `n` converted to an integer, or `None` if `n` is `None`.
///
/// ```rust
/// use microscopium_util::int_or_none;
///
/// assert_eq!(int_or_none(Some(3.0)), Ok(Some(3)));
/// assert_eq!(int_or_none(Some(-2.7)), Ok(Some(-2)));
/// assert_eq!(int_or_none(Some("12")), Ok(Some(12)));
/// assert_eq!(int_or_none(None::<&str>), Ok(None));
/// assert!(int_or_none(Some("not a number")).is_err());
/// ```
pub fn int_or_none<T: ToInt>(n: Option<T>) -> Result<Option<i64>, T::Error> {
    n.map(ToInt::to_int).transpose()
}

macro_rules! lossless_to_int {
    ($($ty:ty),*) => {
        $(
            impl ToInt for $ty {
                type Error = Infallible;

                fn to_int(self) -> Result<i64, Self::Error> {
                    Ok(i64::from(self))
                }
            }
        )*
    };
}

macro_rules! checked_to_int {
    ($($ty:ty),*) => {
        $(
            impl ToInt for $ty {
                type Error = TryFromIntError;

                fn to_int(self) -> Result<i64, Self::Error> {
                    i64::try_from(self)
                }
            }
        )*
    };
}

lossless_to_int!(bool, i8, i16, i32, i64, u8, u16, u32);
checked_to_int!(isize, usize, u64, i128, u128);

// i64::MIN is exactly representable; 2^63 is the first value past i64::MAX.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl ToInt for f64 {
    type Error = FloatToIntError;

    fn to_int(self) -> Result<i64, Self::Error> {
        if self.is_nan() {
            return Err(FloatToIntError::NaN);
        }
        if self.is_infinite() {
            return Err(FloatToIntError::Infinite);
        }
        let truncated = self.trunc();
        if !(I64_LOWER..I64_UPPER).contains(&truncated) {
            return Err(FloatToIntError::OutOfRange { value: self });
        }
        Ok(truncated as i64)
    }
}

impl ToInt for f32 {
    type Error = FloatToIntError;

    fn to_int(self) -> Result<i64, Self::Error> {
        f64::from(self).to_int()
    }
}

impl ToInt for &str {
    type Error = ParseIntError;

    fn to_int(self) -> Result<i64, Self::Error> {
        self.trim().parse()
    }
}

impl ToInt for String {
    type Error = ParseIntError;

    fn to_int(self) -> Result<i64, Self::Error> {
        self.as_str().to_int()
    }
}

impl ToInt for &String {
    type Error = ParseIntError;

    fn to_int(self) -> Result<i64, Self::Error> {
        self.as_str().to_int()
    }
}
