//! Trial-division baselines.
//!
//! These exist as a correctness cross-check for the sieve. Both are pure functions over the immutable
//! candidate range `2..=bound`; neither mutates shared state.

use crate::bound::Bound;
use crate::primes::Primes;

/// Check primality by trying every divisor in `2..value`.
pub fn is_prime_brute_force(value: usize) -> bool {
    value >= 2 && (2..value).all(|divisor| value % divisor != 0)
}

/// Check primality by trying divisors up to `⌊√value⌋` only.
pub fn is_prime_square_root(value: usize) -> bool {
    value >= 2 && (2..=value.isqrt()).all(|divisor| value % divisor != 0)
}

/// All primes `<= bound` by exhaustive trial division.
pub fn brute_force(bound: Bound) -> Primes {
    collect_with(bound, is_prime_brute_force)
}

/// All primes `<= bound` by trial division up to the square root.
pub fn square_root(bound: Bound) -> Primes {
    collect_with(bound, is_prime_square_root)
}

fn collect_with(bound: Bound, is_prime: fn(usize) -> bool) -> Primes {
    Primes::from_ascending((2..=bound.get()).filter(|&value| is_prime(value)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_agree_on_small_values() {
        for value in 0..500 {
            assert_eq!(
                is_prime_brute_force(value),
                is_prime_square_root(value),
                "predicates disagree on {value}"
            );
        }
    }

    #[test]
    fn test_zero_and_one_are_not_prime() {
        assert!(!is_prime_brute_force(0));
        assert!(!is_prime_brute_force(1));
        assert!(!is_prime_square_root(0));
        assert!(!is_prime_square_root(1));
    }

    #[test]
    fn test_square_root_handles_perfect_squares() {
        assert!(!is_prime_square_root(4));
        assert!(!is_prime_square_root(25));
        assert!(!is_prime_square_root(961)); // 31 * 31
        assert!(is_prime_square_root(97));
    }

    #[test]
    fn test_lists() {
        let ten = Bound::new(10).unwrap();
        assert_eq!(brute_force(ten), [2, 3, 5, 7]);
        assert_eq!(square_root(ten), [2, 3, 5, 7]);
        assert!(brute_force(Bound::MIN).is_empty());
        assert!(square_root(Bound::MIN).is_empty());
    }
}
