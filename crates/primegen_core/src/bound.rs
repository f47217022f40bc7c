//! Validated upper bounds.
//!
//! A [`Bound`] is the inclusive upper limit of a prime search. It can only be obtained through validation, so
//! every algorithm in this crate may assume `1 <= bound <= Bound::MAX` without re-checking.
//!
//! ## Notes
//! - Whole-valued floats (`10.0`, `1e3`) are accepted; fractional, negative, zero and non-finite values are not.
//! - Text is trimmed and parsed as an integer first, then as a float, so `"10"`, `" 10 "` and `"10.0"` agree.

use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Inclusive upper limit of a prime search, guaranteed to be a natural number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bound(usize);

impl Bound {
    /// The smallest natural number.
    pub const MIN: Bound = Bound(1);

    /// The largest bound whose eligibility table this crate will allocate (one `bool` per integer).
    pub const MAX: Bound = Bound(1_000_000_000);

    /// Validate a bound.
    ///
    /// ## Errors
    /// - [`ValidationError::NotNatural`] when `value == 0`.
    /// - [`ValidationError::TooLarge`] when `value > Bound::MAX`.
    pub fn new(value: usize) -> Result<Self, ValidationError> {
        if value < Self::MIN.0 {
            return Err(ValidationError::not_natural(value));
        }
        if value > Self::MAX.0 {
            return Err(ValidationError::too_large(value));
        }
        Ok(Bound(value))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Bound> for usize {
    fn from(bound: Bound) -> usize {
        bound.0
    }
}

macro_rules! impl_try_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<$ty> for Bound {
                type Error = ValidationError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    if value < 1 {
                        return Err(ValidationError::not_natural(value));
                    }
                    let value = usize::try_from(value).map_err(|_| ValidationError::too_large(value))?;
                    Bound::new(value)
                }
            }
        )*
    };
}

impl_try_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for Bound {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 {
            return Err(ValidationError::not_natural(value));
        }
        if value > Self::MAX.0 as f64 {
            return Err(ValidationError::too_large(value));
        }
        // Whole and within (1, MAX], so the cast is exact.
        Bound::new(value as usize)
    }
}

impl TryFrom<f32> for Bound {
    type Error = ValidationError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Bound::try_from(f64::from(value)).map_err(|err| err.with_input(value))
    }
}

impl FromStr for Bound {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parsed = if let Ok(int) = text.parse::<i128>() {
            Bound::try_from(int)
        } else if let Ok(float) = text.parse::<f64>() {
            Bound::try_from(float)
        } else {
            return Err(ValidationError::not_natural(text));
        };
        parsed.map_err(|err| err.with_input(text))
    }
}

impl TryFrom<&str> for Bound {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
