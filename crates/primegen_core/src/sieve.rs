//! Sieve of Eratosthenes over a flat eligibility table.
//!
//! ## Notes
//! - One table per call, owned by that call. It is allocated, marked in place, read out once and dropped.
//! - Entries only ever flip eligible → ineligible.
//! - Marking for a prime `p` starts at `p * p`; smaller multiples already have a smaller prime factor.
//! - The next candidate is found by scanning forward from `p + 1`, so the scan never revisits a prefix. The
//!   outer loop stops as soon as `p * p > bound` or no eligible index remains above `p`.

use crate::bound::Bound;
use crate::primes::Primes;

/// Boolean flag per integer `0..=bound`, indexed by the integer itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityTable {
    flags: Vec<bool>,
}

impl EligibilityTable {
    /// Allocate a table with every entry eligible except 0 and 1.
    pub fn new(bound: Bound) -> Self {
        let mut flags = vec![true; bound.get() + 1];
        // A bound is at least 1, so both indices exist.
        flags[0] = false;
        flags[1] = false;
        Self { flags }
    }

    /// Out-of-range values are reported ineligible.
    pub fn is_eligible(&self, value: usize) -> bool {
        self.flags.get(value).copied().unwrap_or(false)
    }

    /// Mark `p*p, p*p + p, …` up to the bound as ineligible.
    ///
    /// No-op when `p * p` exceeds the bound.
    pub fn eliminate_multiples(&mut self, p: usize) {
        debug_assert!(p >= 2, "marking step must be at least 2");
        let Some(start) = p.checked_mul(p) else {
            return;
        };
        let len = self.flags.len();
        if start >= len {
            return;
        }
        for flag in self.flags[start..].iter_mut().step_by(p) {
            *flag = false;
        }
    }

    /// Smallest eligible index strictly greater than `p`, if any.
    pub fn next_eligible_after(&self, p: usize) -> Option<usize> {
        let from = p.checked_add(1)?;
        let rest = self.flags.get(from..)?;
        rest.iter().position(|&eligible| eligible).map(|offset| from + offset)
    }

    /// Number of entries still eligible.
    pub fn count_eligible(&self) -> usize {
        self.flags.iter().filter(|&&eligible| eligible).count()
    }

    /// Extract the eligible indices in ascending order, consuming the table.
    pub fn into_primes(self) -> Primes {
        let values = self
            .flags
            .iter()
            .enumerate()
            .filter_map(|(value, &eligible)| eligible.then_some(value))
            .collect();
        Primes::from_ascending(values)
    }
}

/// Run the sieve and return the finished table.
pub fn sieve_table(bound: Bound) -> EligibilityTable {
    let mut table = EligibilityTable::new(bound);
    let limit = bound.get();

    let mut candidate = Some(2_usize);
    while let Some(p) = candidate {
        match p.checked_mul(p) {
            Some(square) if square <= limit => {}
            _ => break,
        }
        table.eliminate_multiples(p);
        candidate = table.next_eligible_after(p);
    }

    table
}

/// All primes `<= bound`, ascending.
pub fn sieve(bound: Bound) -> Primes {
    sieve_table(bound).into_primes()
}
