//! Run configuration for the primegen driver.
//!
//! Built from CLI arguments, or directly through the `with_*` builder methods.

use clap::ValueEnum;
use primegen_core::Method;

/// Bounds used when none are given, matching the original demonstration.
pub const DEMO_BOUNDS: [&str; 2] = ["10", "100"];

/// How report lines are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `num: 10 sieve: 2,3,5,7`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Raw bound inputs, validated when the report is built so rejections can be reported per input
    pub bounds: Vec<String>,
    /// Methods to run for each valid bound, in output order
    pub methods: Vec<Method>,
    /// Output format
    pub format: OutputFormat,
    /// Separator between primes in text output
    pub separator: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            bounds: DEMO_BOUNDS.iter().map(|b| b.to_string()).collect(),
            methods: vec![Method::Sieve],
            format: OutputFormat::Text,
            separator: ",".to_string(),
        }
    }
}

impl RunConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// The original demonstration: bounds 10 and 100, every method.
    pub fn demo() -> Self {
        Self::default().with_methods(Method::ALL)
    }

    /// Set the bounds. An empty list keeps the current bounds.
    pub fn with_bounds<I, S>(mut self, bounds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bounds: Vec<String> = bounds.into_iter().map(Into::into).collect();
        if !bounds.is_empty() {
            self.bounds = bounds;
        }
        self
    }

    /// Set the methods. An empty list keeps the current methods; duplicates are dropped.
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        let mut unique = Vec::new();
        for method in methods {
            if !unique.contains(&method) {
                unique.push(method);
            }
        }
        if !unique.is_empty() {
            self.methods = unique;
        }
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the separator used between primes in text output
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
