#![forbid(unsafe_code)]
//! primegen: list the prime numbers up to a bound.
//!
//! The algorithms live in [`primegen_core`] (sieve, trial-division baselines, bound validation). This crate is
//! the driver around them: CLI, run configuration, report rendering and logging.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod report;
pub mod version;

pub use config::{OutputFormat, RunConfig};
pub use primegen_core::{
    Bound, Method, Primes, ValidationError, compute_primes, compute_primes_with, count_primes,
};
pub use report::{Line, OutputError, Report};
