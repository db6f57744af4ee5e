//! # Error Types
//!
//! Domain-specific error types for ferramentas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ferramentas-core errors (this file)                                   │
//! │  ├── CoreError        - Hard failures (entropy, internal tables)       │
//! │  └── ValidationError  - Calculator/generator input failures            │
//! │                                                                         │
//! │  toolbox errors (app crate)                                            │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! A malformed or degenerate CPF/CNPJ/card number is ordinary control flow:
//! validators answer `false` (or return an issue list). Only things that
//! make a result impossible to compute are represented here.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The random source could not supply a digit.
    ///
    /// ## When This Occurs
    /// - The OS CSPRNG is unavailable (sandboxed/early-boot environments)
    /// - A test source ran out of scripted digits
    ///
    /// Generation never falls back to a weaker source.
    #[error("Entropy source unavailable: {reason}")]
    EntropySourceUnavailable { reason: String },

    /// Digit and weight slices passed to the check-digit routine differ in length.
    #[error("Check digit weights mismatch: {digits} digits, {weights} weights")]
    WeightMismatch { digits: usize, weights: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an entropy error from any displayable cause.
    pub fn entropy(reason: impl std::fmt::Display) -> Self {
        CoreError::EntropySourceUnavailable {
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when calculator or generator input doesn't meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a number, unknown currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::entropy("os rng offline");
        assert_eq!(err.to_string(), "Entropy source unavailable: os rng offline");

        let err = CoreError::WeightMismatch {
            digits: 9,
            weights: 10,
        };
        assert_eq!(
            err.to_string(),
            "Check digit weights mismatch: 9 digits, 10 weights"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "weight".to_string(),
        };
        assert_eq!(err.to_string(), "weight must be positive");

        let err = ValidationError::OutOfRange {
            field: "length".to_string(),
            min: 4,
            max: 50,
        };
        assert_eq!(err.to_string(), "length must be between 4 and 50");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "character classes".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
