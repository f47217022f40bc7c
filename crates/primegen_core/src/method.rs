//! Registry of prime-generation methods.
//!
//! Names here are the canonical spelling shared by the CLI, the report output, and error messages.

use std::fmt;
use std::str::FromStr;

use crate::bound::Bound;
use crate::errors::UnknownMethodError;
use crate::primes::Primes;
use crate::{sieve, trial};

/// A way of listing the primes up to a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// Trial division by every smaller candidate.
    BruteForce,
    /// Trial division by candidates up to the square root.
    SquareRoot,
    /// Sieve of Eratosthenes.
    Sieve,
}

impl Method {
    /// Every method, in demonstration order (baselines first, sieve last).
    pub const ALL: [Method; 3] = [Method::BruteForce, Method::SquareRoot, Method::Sieve];

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Method::BruteForce => "brute-force",
            Method::SquareRoot => "square-root",
            Method::Sieve => "sieve",
        }
    }

    /// Whether this method is only a cross-check for the sieve.
    pub fn is_baseline(self) -> bool {
        !matches!(self, Method::Sieve)
    }

    /// Compute all primes `<= bound` with this method.
    pub fn compute(self, bound: Bound) -> Primes {
        match self {
            Method::BruteForce => trial::brute_force(bound),
            Method::SquareRoot => trial::square_root(bound),
            Method::Sieve => sieve::sieve(bound),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Method {
    type Err = UnknownMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| UnknownMethodError { name: s.to_string() })
    }
}
