//! Property-based tests for prime generation
//!
//! These tests use proptest to verify invariants across many randomly
//! generated bounds, catching edge cases that hand-written tests might miss.

use primegen_core::trial::is_prime_brute_force;
use primegen_core::{Bound, Method, ValidationError, compute_primes, compute_primes_with, count_primes};
use proptest::prelude::*;

// Brute force is quadratic; keep its bounds small.
const MAX_TESTED_BOUND: usize = 3_000;

fn bound_strategy() -> impl Strategy<Value = usize> {
    1..=MAX_TESTED_BOUND
}

proptest! {
    /// Property: results are strictly ascending (hence duplicate-free)
    #[test]
    fn results_are_strictly_ascending(bound in bound_strategy()) {
        let primes = compute_primes(bound).unwrap();
        prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: every element is prime by definition and lies within the bound
    #[test]
    fn every_element_is_prime(bound in bound_strategy()) {
        let primes = compute_primes(bound).unwrap();
        for &value in primes.iter() {
            prop_assert!(value >= 2);
            prop_assert!(value <= bound);
            prop_assert!((2..value).all(|d| value % d != 0), "{} has a divisor", value);
        }
    }

    /// Property: no prime within the bound is missing
    #[test]
    fn no_prime_is_missing(bound in bound_strategy()) {
        let primes = compute_primes(bound).unwrap();
        let expected = (0..=bound).filter(|&v| is_prime_brute_force(v)).count();
        prop_assert_eq!(primes.len(), expected);
    }

    /// Property: the sieve equals the brute-force reference
    #[test]
    fn sieve_matches_brute_force(bound in bound_strategy()) {
        let sieve = compute_primes_with(Method::Sieve, bound).unwrap();
        let brute = compute_primes_with(Method::BruteForce, bound).unwrap();
        prop_assert_eq!(sieve, brute);
    }

    /// Property: the square-root baseline equals the sieve
    #[test]
    fn square_root_matches_sieve(bound in bound_strategy()) {
        let sieve = compute_primes_with(Method::Sieve, bound).unwrap();
        let root = compute_primes_with(Method::SquareRoot, bound).unwrap();
        prop_assert_eq!(sieve, root);
    }

    /// Property: repeated calls return identical sequences
    #[test]
    fn computation_is_idempotent(bound in bound_strategy()) {
        prop_assert_eq!(compute_primes(bound).unwrap(), compute_primes(bound).unwrap());
    }

    /// Property: counting agrees with listing
    #[test]
    fn count_matches_length(bound in bound_strategy()) {
        prop_assert_eq!(count_primes(bound).unwrap(), compute_primes(bound).unwrap().len());
    }

    /// Property: growing the bound only appends primes
    #[test]
    fn larger_bound_extends_smaller(small in bound_strategy(), extra in 0usize..500) {
        let shorter = compute_primes(small).unwrap();
        let longer = compute_primes(small + extra).unwrap();
        prop_assert!(longer.starts_with(&shorter));
    }

    /// Property: non-positive integers are rejected
    #[test]
    fn non_positive_integers_are_rejected(value in i64::MIN..=0) {
        prop_assert_eq!(compute_primes(value), Err(ValidationError::not_natural(value)));
    }

    /// Property: fractional values are rejected
    #[test]
    fn fractional_values_are_rejected(whole in 0u32..10_000, frac in 0.001f64..0.999) {
        let value = f64::from(whole) + frac;
        let rejected = matches!(compute_primes(value), Err(ValidationError::NotNatural { .. }));
        prop_assert!(rejected, "{} was accepted", value);
    }

    /// Property: integer text parses to the same bound as the integer
    #[test]
    fn text_bounds_match_integer_bounds(bound in bound_strategy()) {
        let parsed: Bound = bound.to_string().parse().unwrap();
        prop_assert_eq!(parsed.get(), bound);
        let float_text = format!("{bound}.0");
        prop_assert_eq!(float_text.parse::<Bound>().unwrap().get(), bound);
    }
}
