//! The ordered result sequence.

use std::fmt;
use std::ops::Deref;

/// Ascending, duplicate-free sequence of primes produced by one computation.
///
/// Read-only once built. Derefs to `[usize]` and displays comma-joined (`2,3,5,7`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Primes(Vec<usize>);

impl Primes {
    /// Wrap values already known to be strictly ascending.
    pub(crate) fn from_ascending(values: Vec<usize>) -> Self {
        debug_assert!(values.windows(2).all(|w| w[0] < w[1]));
        Primes(values)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Join the primes with `separator` (the text form used by the demo output).
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Deref for Primes {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Primes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(","))
    }
}

impl IntoIterator for Primes {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Primes {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Primes> for Vec<usize> {
    fn from(primes: Primes) -> Vec<usize> {
        primes.0
    }
}

impl PartialEq<[usize]> for Primes {
    fn eq(&self, other: &[usize]) -> bool {
        self.0 == other
    }
}

impl PartialEq<Vec<usize>> for Primes {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.0 == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for Primes {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.0 == other
    }
}
