//! Seed-like inputs accepted by the normaliser.

use std::str::FromStr;

use crate::error::RandomStateError;

use super::RandomState;

/// Everything a caller may pass where a random state is expected.
///
/// `Option<T>` converts too, with `None` meaning [`Seed::Default`].
#[derive(Debug, Clone, Default)]
pub enum Seed {
    /// No seed: use the shared default generator.
    #[default]
    Default,

    /// Build a fresh generator from this integer.
    ///
    /// Any primitive integer up to 64 bits converts; only `0..=u32::MAX`
    /// is accepted by the normaliser.
    Value(i128),

    /// Use this generator as is.
    State(RandomState),
}

macro_rules! integer_seed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Seed {
                fn from(value: $ty) -> Self {
                    Seed::Value(i128::from(value))
                }
            }
        )*
    };
}

integer_seed!(i8, i16, i32, i64, u8, u16, u32, u64);

// Pointer-sized integers are at most 64 bits wide, so the casts are lossless.
impl From<usize> for Seed {
    fn from(value: usize) -> Self {
        Seed::Value(value as i128)
    }
}

impl From<isize> for Seed {
    fn from(value: isize) -> Self {
        Seed::Value(value as i128)
    }
}

impl From<RandomState> for Seed {
    fn from(state: RandomState) -> Self {
        Seed::State(state)
    }
}

impl From<&RandomState> for Seed {
    fn from(state: &RandomState) -> Self {
        Seed::State(state.clone())
    }
}

impl<T: Into<Seed>> From<Option<T>> for Seed {
    fn from(value: Option<T>) -> Self {
        value.map_or(Seed::Default, Into::into)
    }
}

impl FromStr for Seed {
    type Err = RandomStateError;

    /// Parse a textual seed, as found in configuration or on a command line.
    ///
    /// The text, ignoring surrounding whitespace, must be a decimal integer.
    /// Blank text and words such as `none` are invalid seeds, not a request
    /// for the shared default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i128>()
            .map(Seed::Value)
            .map_err(|_| RandomStateError::invalid_seed(s))
    }
}
