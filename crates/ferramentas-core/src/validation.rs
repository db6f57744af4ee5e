//! # Validation Module
//!
//! Input guards shared by the calculators and generators.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (TypeScript)                                       │
//! │  ├── Input masks, numeric keyboards                                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Toolbox command (Rust)                                       │
//! │  ├── Deserialization of the request                                    │
//! │  └── THIS MODULE: text → number, range and sign checks                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Tool logic (bmi, currency, password)                         │
//! │  └── Assumes validated input                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Document and card validators do NOT go through here: for them an
//! invalid input is an answer (`false`), not an error.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Longest password the generator will produce.
pub const MAX_PASSWORD_LENGTH: usize = 50;

// =============================================================================
// Text Validators
// =============================================================================

/// Parses a decimal number typed by a user.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Either `.` or `,` is accepted as the decimal separator (`1,75` = `1.75`)
/// - Must not be empty
///
/// ## Example
/// ```rust
/// use ferramentas_core::validation::parse_decimal;
///
/// assert_eq!(parse_decimal("height", "1,75").unwrap(), 1.75);
/// assert!(parse_decimal("height", "").is_err());
/// assert!(parse_decimal("height", "abc").is_err());
/// ```
pub fn parse_decimal(field: &str, input: &str) -> ValidationResult<f64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let normalized = input.replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a number".to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a strictly positive, finite quantity (weight, height, amount).
pub fn validate_positive(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Validates a requested password length.
///
/// ## Rules
/// - Must be between MIN_PASSWORD_LENGTH (4) and MAX_PASSWORD_LENGTH (50)
pub fn validate_password_length(length: usize) -> ValidationResult<()> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(ValidationError::OutOfRange {
            field: "length".to_string(),
            min: MIN_PASSWORD_LENGTH as i64,
            max: MAX_PASSWORD_LENGTH as i64,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("weight", "70").unwrap(), 70.0);
        assert_eq!(parse_decimal("weight", " 70.5 ").unwrap(), 70.5);
        assert_eq!(parse_decimal("weight", "70,5").unwrap(), 70.5);
        assert_eq!(parse_decimal("weight", "-3").unwrap(), -3.0);

        assert!(matches!(
            parse_decimal("weight", "   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_decimal("weight", "seventy"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(parse_decimal("weight", "inf").is_err());
        assert!(parse_decimal("weight", "NaN").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("amount", 0.01).is_ok());
        assert!(matches!(
            validate_positive("amount", 0.0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_positive("amount", -1.0).is_err());
        assert!(validate_positive("amount", f64::NAN).is_err());
        assert!(validate_positive("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password_length(4).is_ok());
        assert!(validate_password_length(12).is_ok());
        assert!(validate_password_length(50).is_ok());

        assert!(validate_password_length(3).is_err());
        assert!(validate_password_length(51).is_err());
    }
}
