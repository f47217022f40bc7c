//! Build and render the driver's report.
//!
//! A [`Report`] is an ordered list of [`Line`]s, one per (bound, method) pair, per counted bound, or per parity
//! check. Inputs that fail validation become [`Line::Rejected`] and are skipped; the rest of the report is still
//! built.
//!
//! ## Output formats
//!
//! - **Text**: `num: 10 sieve: 2,3,5,7`. Rejected inputs are not written to stdout; the CLI reports them on stderr.
//! - **JSON**: one object per line, rejected inputs included as `{"input": ..., "error": ...}`.

use std::io::{self, Write};

use primegen_core::parity::{self, ParityReport};
use primegen_core::{Bound, Method, Primes, ValidationError};
use serde_json::{Value, json};
use thiserror::Error;

use crate::config::{OutputFormat, RunConfig};

/// Errors that occur while writing a report
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// One entry of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Primes { bound: Bound, method: Method, primes: Primes },
    Count { bound: Bound, count: usize },
    Parity(ParityReport),
    Rejected(ValidationError),
}

impl Line {
    /// Text form, or `None` for lines that only appear on stderr.
    pub fn to_text(&self, separator: &str) -> Option<String> {
        match self {
            Line::Primes { bound, method, primes } => {
                Some(format!("num: {bound} {method}: {}", primes.join(separator)))
            }
            Line::Count { bound, count } => Some(format!("num: {bound} count: {count}")),
            Line::Parity(report) if report.is_consistent() => Some(format!(
                "num: {} parity: ok ({} primes)",
                report.bound,
                report.reference.len()
            )),
            Line::Parity(report) => Some(
                report
                    .mismatches
                    .iter()
                    .map(|m| {
                        format!(
                            "num: {} parity: {} differs (missing: {:?}, unexpected: {:?})",
                            m.bound,
                            m.method,
                            m.missing(),
                            m.unexpected()
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Line::Rejected(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Line::Primes { bound, method, primes } => json!({
                "bound": bound.get(),
                "method": method.name(),
                "primes": primes.as_slice(),
            }),
            Line::Count { bound, count } => json!({
                "bound": bound.get(),
                "count": count,
            }),
            Line::Parity(report) => json!({
                "bound": report.bound.get(),
                "consistent": report.is_consistent(),
                "primes": report.reference.len(),
                "mismatches": report
                    .mismatches
                    .iter()
                    .map(|m| json!({
                        "method": m.method.name(),
                        "missing": m.missing(),
                        "unexpected": m.unexpected(),
                    }))
                    .collect::<Vec<_>>(),
            }),
            Line::Rejected(error) => json!({
                "input": error.input(),
                "error": error.to_string(),
            }),
        }
    }

    /// Whether this line should make the run exit non-zero.
    pub fn is_failure(&self) -> bool {
        match self {
            Line::Rejected(_) => true,
            Line::Parity(report) => !report.is_consistent(),
            Line::Primes { .. } | Line::Count { .. } => false,
        }
    }
}

/// Ordered report lines for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<Line>,
}

impl Report {
    /// Compute every configured method for every valid bound.
    pub fn primes(config: &RunConfig) -> Self {
        Self::build(config, |bound, lines| {
            for &method in &config.methods {
                let primes = method.compute(bound);
                tracing::debug!(%bound, %method, found = primes.len(), "computed primes");
                lines.push(Line::Primes { bound, method, primes });
            }
        })
    }

    /// Count the primes for every valid bound.
    pub fn counts(config: &RunConfig) -> Self {
        Self::build(config, |bound, lines| match primegen_core::count_primes(bound.get()) {
            Ok(count) => {
                tracing::debug!(%bound, count, "counted primes");
                lines.push(Line::Count { bound, count });
            }
            Err(error) => lines.push(Line::Rejected(error)),
        })
    }

    /// Cross-check every baseline against the sieve for every valid bound.
    pub fn parity(config: &RunConfig) -> Self {
        Self::build(config, |bound, lines| {
            let report = parity::check(bound);
            for mismatch in &report.mismatches {
                tracing::error!(
                    %bound,
                    method = %mismatch.method,
                    missing = ?mismatch.missing(),
                    unexpected = ?mismatch.unexpected(),
                    "method disagrees with the sieve"
                );
            }
            lines.push(Line::Parity(report));
        })
    }

    fn build(config: &RunConfig, mut per_bound: impl FnMut(Bound, &mut Vec<Line>)) -> Self {
        let mut lines = Vec::new();
        for input in &config.bounds {
            match input.parse::<Bound>() {
                Ok(bound) => per_bound(bound, &mut lines),
                Err(error) => {
                    // The CLI reports the rejection itself; keep the log below the default filter.
                    tracing::debug!(input = %input, %error, "skipping bound");
                    lines.push(Line::Rejected(error));
                }
            }
        }
        Self { lines }
    }

    pub fn rejections(&self) -> impl Iterator<Item = &ValidationError> {
        self.lines.iter().filter_map(|line| match line {
            Line::Rejected(error) => Some(error),
            _ => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.lines.iter().any(Line::is_failure)
    }

    /// Write the stdout part of the report.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat, separator: &str) -> Result<(), OutputError> {
        for line in &self.lines {
            match format {
                OutputFormat::Text => {
                    if let Some(text) = line.to_text(separator) {
                        writeln!(out, "{text}")?;
                    }
                }
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &line.to_json())?;
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }

    /// Render the stdout part of the report into a string.
    pub fn render(&self, format: OutputFormat, separator: &str) -> Result<String, OutputError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, format, separator)?;
        // Every fragment written above is valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
