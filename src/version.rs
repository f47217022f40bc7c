//! primegen version information.
//!
//! Both binaries report this value so `primegen --version` and the bench header agree.

/// The primegen version string (for example, `0.1.0`), taken from Cargo metadata at compile time.
pub const PRIMEGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
