//! Compute the primes up to a bound.
//!
//! This crate is the pure core shared by the `primegen` CLI, its benchmark binary and its fuzz target. It holds
//! the Sieve of Eratosthenes, two trial-division baselines used to cross-check it, and the typed validation of
//! the bound.
//!
//! ## Notes
//!
//! - **No IO**, no logging, no global state. Each call allocates its own table and drops it before returning.
//! - The only failure is an invalid bound ([`ValidationError`]); once a [`Bound`] exists, computation cannot fail.
//! - Results are [`Primes`]: ascending, duplicate-free, printable as `2,3,5,7`.
//!
//! ## Examples
//!
//! ```rust
//! use primegen_core::{compute_primes, ValidationError};
//!
//! assert_eq!(compute_primes(10).unwrap(), [2, 3, 5, 7]);
//! assert!(matches!(compute_primes(3.5), Err(ValidationError::NotNatural { .. })));
//! ```

pub mod bound;
pub mod errors;
pub mod method;
pub mod parity;
pub mod primes;
pub mod sieve;
pub mod trial;

pub use bound::Bound;
pub use errors::{UnknownMethodError, ValidationError};
pub use method::Method;
pub use primes::Primes;

/// List all primes `<= bound` with the Sieve of Eratosthenes.
///
/// ## Parameters
/// - `bound`: any integer, float or string convertible to a [`Bound`].
///
/// ## Returns
/// - (`Primes`): the primes in ascending order.
///
/// ## Errors
/// - [`ValidationError`] when `bound` is not a natural number (`0`, `-5`, `3.5`, `"abc"`) or exceeds
///   [`Bound::MAX`]. No table is allocated in that case.
pub fn compute_primes<B>(bound: B) -> Result<Primes, ValidationError>
where
    B: TryInto<Bound, Error = ValidationError>,
{
    compute_primes_with(Method::Sieve, bound)
}

/// List all primes `<= bound` with the given method.
///
/// ## Errors
/// - Same as [`compute_primes`].
pub fn compute_primes_with<B>(method: Method, bound: B) -> Result<Primes, ValidationError>
where
    B: TryInto<Bound, Error = ValidationError>,
{
    let bound = bound.try_into()?;
    Ok(method.compute(bound))
}

/// Count the primes `<= bound` (π(bound)) without materializing the sequence.
///
/// ## Errors
/// - Same as [`compute_primes`].
pub fn count_primes<B>(bound: B) -> Result<usize, ValidationError>
where
    B: TryInto<Bound, Error = ValidationError>,
{
    let bound = bound.try_into()?;
    Ok(sieve::sieve_table(bound).count_eligible())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMES_TO_100: [usize; 25] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    ];

    #[test]
    fn test_concrete_cases() {
        assert!(compute_primes(1).unwrap().is_empty());
        assert_eq!(compute_primes(2).unwrap(), [2]);
        assert_eq!(compute_primes(10).unwrap(), [2, 3, 5, 7]);
        assert_eq!(compute_primes(100).unwrap(), PRIMES_TO_100);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(compute_primes(0), Err(ValidationError::not_natural(0)));
        assert_eq!(compute_primes(-5), Err(ValidationError::not_natural(-5)));
        assert_eq!(compute_primes(3.5), Err(ValidationError::not_natural(3.5)));
        assert_eq!(compute_primes("abc"), Err(ValidationError::not_natural("abc")));
    }

    #[test]
    fn test_every_method_accepts_the_same_inputs() {
        for method in Method::ALL {
            assert_eq!(compute_primes_with(method, "100").unwrap(), PRIMES_TO_100);
            assert!(compute_primes_with(method, 0_u64).is_err());
        }
    }

    #[test]
    fn test_count_primes() {
        assert_eq!(count_primes(1), Ok(0));
        assert_eq!(count_primes(100), Ok(25));
        assert_eq!(count_primes(100.0), Ok(25));
        assert!(count_primes(-1).is_err());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = compute_primes(500).unwrap();
        let second = compute_primes(500).unwrap();
        assert_eq!(first, second);
    }
}
