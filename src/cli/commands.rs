//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};

use primegen_core::ValidationError;

use super::{CliError, CliResult, ExitCode};
use crate::config::RunConfig;
use crate::report::Report;

/// List the primes for every configured bound and method.
#[tracing::instrument(skip_all, fields(bounds = config.bounds.len(), methods = config.methods.len()))]
pub fn list_primes(config: &RunConfig) -> CliResult<ExitCode> {
    finish(Report::primes(config), config)
}

/// Print π(bound) for every configured bound.
#[tracing::instrument(skip_all, fields(bounds = config.bounds.len()))]
pub fn count_primes(config: &RunConfig) -> CliResult<ExitCode> {
    finish(Report::counts(config), config)
}

/// Cross-check the baselines against the sieve for every configured bound.
///
/// Exits with `FAILURE` when any method disagrees.
#[tracing::instrument(skip_all, fields(bounds = config.bounds.len()))]
pub fn check_parity(config: &RunConfig) -> CliResult<ExitCode> {
    finish(Report::parity(config), config)
}

/// Write the report to stdout, surface rejected bounds on stderr, and pick the exit code.
fn finish(report: Report, config: &RunConfig) -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report
        .write_to(&mut out, config.format, &config.separator)
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;
    out.flush()
        .map_err(|e| CliError::failure(format!("Error: failed to flush output: {e}")))?;

    for error in report.rejections() {
        eprintln!("{}", render_rejection(error));
    }

    if report.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Render a rejected bound as a miette diagnostic (code + help).
fn render_rejection(error: &ValidationError) -> String {
    format!("{:?}", miette::Report::new(error.clone()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_mentions_input_and_help() {
        let rendered = render_rejection(&ValidationError::not_natural("3.5"));
        assert!(rendered.contains("3.5 is not a natural number"), "{rendered}");
        assert!(rendered.contains("greater than or equal to 1"), "{rendered}");
    }

    #[test]
    fn test_exit_codes() {
        let ok = RunConfig::new().with_bounds(["10"]);
        assert_eq!(list_primes(&ok).unwrap(), ExitCode::SUCCESS);
        assert_eq!(check_parity(&ok).unwrap(), ExitCode::SUCCESS);

        let rejected = RunConfig::new().with_bounds(["10", "3.5"]);
        assert_eq!(count_primes(&rejected).unwrap(), ExitCode::FAILURE);
    }
}
