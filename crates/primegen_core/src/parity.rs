//! Cross-implementation parity check.
//!
//! Every baseline method must produce exactly the sieve's sequence for the same bound.

use crate::bound::Bound;
use crate::method::Method;
use crate::primes::Primes;

/// One baseline whose output differs from the sieve's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub bound: Bound,
    pub method: Method,
    pub expected: Primes,
    pub actual: Primes,
}

impl Mismatch {
    /// Values the sieve reported that `method` missed.
    pub fn missing(&self) -> Vec<usize> {
        self.expected
            .iter()
            .copied()
            .filter(|value| self.actual.binary_search(value).is_err())
            .collect()
    }

    /// Values `method` reported that the sieve did not.
    pub fn unexpected(&self) -> Vec<usize> {
        self.actual
            .iter()
            .copied()
            .filter(|value| self.expected.binary_search(value).is_err())
            .collect()
    }
}

/// Result of comparing every method for one bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityReport {
    pub bound: Bound,
    /// The sieve's output, used as the reference.
    pub reference: Primes,
    pub mismatches: Vec<Mismatch>,
}

impl ParityReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare each baseline method against the sieve for `bound`.
pub fn check(bound: Bound) -> ParityReport {
    check_with(bound, Method::ALL.into_iter().filter(|m| m.is_baseline()), Method::compute)
}

/// Compare `methods` against the sieve using `compute` to run them.
///
/// `compute` is a parameter so the comparison itself can be tested with a deliberately wrong method.
pub fn check_with<I, F>(bound: Bound, methods: I, compute: F) -> ParityReport
where
    I: IntoIterator<Item = Method>,
    F: Fn(Method, Bound) -> Primes,
{
    let reference = Method::Sieve.compute(bound);
    let mismatches = methods
        .into_iter()
        .filter_map(|method| {
            let actual = compute(method, bound);
            (actual != reference).then(|| Mismatch {
                bound,
                method,
                expected: reference.clone(),
                actual,
            })
        })
        .collect();

    ParityReport {
        bound,
        reference,
        mismatches,
    }
}
