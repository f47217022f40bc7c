//! Errors produced by the semantic core.
//!
//! Every prime-generation entry point fails in exactly one way: the requested bound is not a natural
//! number this crate can sieve. Callers decide how to surface that; nothing here logs or prints.

use miette::Diagnostic;
use thiserror::Error;

use crate::bound::Bound;

/// Reject a bound before any table is allocated.
///
/// ## Notes
/// - Both variants are the same kind of failure (invalid input). `TooLarge` exists so the message can say why an
///   otherwise whole, positive number was refused.
/// - `input` keeps the caller's original spelling (`"3.5"`, `"-5"`), not a normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("{input} is not a natural number")]
    #[diagnostic(
        code(primegen::bound::not_natural),
        help("bounds must be whole numbers greater than or equal to 1")
    )]
    NotNatural { input: String },

    #[error("{input} exceeds the largest supported bound ({max})", max = Bound::MAX)]
    #[diagnostic(
        code(primegen::bound::too_large),
        help("the eligibility table holds one flag per integer; pick a smaller bound")
    )]
    TooLarge { input: String },
}

impl ValidationError {
    pub fn not_natural(input: impl ToString) -> Self {
        ValidationError::NotNatural {
            input: input.to_string(),
        }
    }

    pub fn too_large(input: impl ToString) -> Self {
        ValidationError::TooLarge {
            input: input.to_string(),
        }
    }

    /// Return the rejected input as the caller spelled it.
    pub fn input(&self) -> &str {
        match self {
            ValidationError::NotNatural { input } | ValidationError::TooLarge { input } => input,
        }
    }

    /// Replace the recorded input, keeping the variant.
    ///
    /// Used when a textual bound is parsed through a numeric conversion and the error should quote the text.
    pub fn with_input(self, input: impl ToString) -> Self {
        match self {
            ValidationError::NotNatural { .. } => ValidationError::not_natural(input),
            ValidationError::TooLarge { .. } => ValidationError::too_large(input),
        }
    }
}

/// Reject an unknown method name.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unknown method `{name}` (expected one of: brute-force, square-root, sieve)")]
#[diagnostic(code(primegen::method::unknown))]
pub struct UnknownMethodError {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_natural_message() {
        let err = ValidationError::not_natural(3.5);
        assert_eq!(err.to_string(), "3.5 is not a natural number");
        assert_eq!(err.input(), "3.5");
    }

    #[test]
    fn test_too_large_message_mentions_max() {
        let err = ValidationError::too_large("99999999999");
        assert_eq!(
            err.to_string(),
            "99999999999 exceeds the largest supported bound (1000000000)"
        );
    }

    #[test]
    fn test_with_input_keeps_variant() {
        let err = ValidationError::too_large(1e12).with_input("1e12");
        assert!(matches!(err, ValidationError::TooLarge { .. }));
        assert_eq!(err.input(), "1e12");
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = ValidationError::not_natural(0);
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("primegen::bound::not_natural"));
    }
}
