//! CLI module for primegen
//!
//! ## Commands
//!
//! - `[BOUND]...` - List the primes up to each bound (default action)
//! - `demo` - Reproduce the demonstration: bounds 10 and 100, every method
//! - `check [BOUND]...` - Cross-check the trial-division baselines against the sieve
//! - `count [BOUND]...` - Print the number of primes up to each bound
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.
//!
//! Bounds are taken as raw strings. Validation happens in the core, so `0`, `-5` and `3.5` are reported as
//! invalid bounds (and skipped) rather than rejected by the argument parser.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use primegen_core::Method;

use crate::config::{OutputFormat, RunConfig};
use crate::version::PRIMEGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// List the prime numbers up to a bound
#[derive(Parser, Debug)]
#[command(name = "primegen")]
#[command(version = PRIMEGEN_VERSION)]
#[command(about = "List the prime numbers up to a bound", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Inclusive upper bounds (default: 10 100)
    #[arg(value_name = "BOUND", allow_negative_numbers = true)]
    pub bounds: Vec<String>,

    /// Method to run; repeat to run several (default: sieve)
    #[arg(short = 'm', long = "method", value_enum, value_name = "METHOD")]
    pub methods: Vec<MethodArg>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by every command
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Separator between primes in text output
    #[arg(long, value_name = "SEP", default_value = ",", global = true)]
    pub separator: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the primes up to 10 and 100 with every method
    Demo,

    /// Check that every method agrees with the sieve
    Check {
        /// Inclusive upper bounds (default: 10 100)
        #[arg(value_name = "BOUND", allow_negative_numbers = true)]
        bounds: Vec<String>,
    },

    /// Print how many primes lie at or below each bound
    Count {
        /// Inclusive upper bounds (default: 10 100)
        #[arg(value_name = "BOUND", allow_negative_numbers = true)]
        bounds: Vec<String>,
    },
}

/// Method names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Trial division by every smaller number
    BruteForce,
    /// Trial division up to the square root
    SquareRoot,
    /// Sieve of Eratosthenes
    Sieve,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Method {
        match arg {
            MethodArg::BruteForce => Method::BruteForce,
            MethodArg::SquareRoot => Method::SquareRoot,
            MethodArg::Sieve => Method::Sieve,
        }
    }
}

impl OutputArgs {
    fn apply(&self, config: RunConfig) -> RunConfig {
        config.with_format(self.format).with_separator(self.separator.as_str())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = config_for(&cli);
    match cli.command {
        Some(Command::Demo) | None => commands::list_primes(&config),
        Some(Command::Check { .. }) => commands::check_parity(&config),
        Some(Command::Count { .. }) => commands::count_primes(&config),
    }
}

/// Translate parsed arguments into a run configuration.
pub fn config_for(cli: &Cli) -> RunConfig {
    let base = match &cli.command {
        Some(Command::Demo) => RunConfig::demo(),
        Some(Command::Check { bounds }) | Some(Command::Count { bounds }) => {
            RunConfig::new().with_bounds(bounds.iter().cloned())
        }
        None => RunConfig::new()
            .with_bounds(cli.bounds.iter().cloned())
            .with_methods(cli.methods.iter().copied().map(Method::from)),
    };
    cli.output.apply(base)
}

// ============================================================================
// Tests
// ============================================================================
