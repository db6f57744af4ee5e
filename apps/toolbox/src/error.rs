//! # API Error Type
//!
//! Unified error type for toolbox commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Ferramentas                            │
//! │                                                                         │
//! │  Front end                   Rust                                       │
//! │  ─────────                   ────                                       │
//! │                                                                         │
//! │  invoke('calculate_bmi', { weight: "", height: "175" })                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON? ────────── serde_json::Error ──────────┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  Bad input? ───── CoreError::Validation ──────► ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An invalid CPF, card or phone number is NOT an error: those commands
//! succeed with `valid: false`.

use serde::Serialize;

use ferramentas_core::{CoreError, ValidationError};

/// Result alias for command functions.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error returned from toolbox commands.
///
/// ## Serialization
/// This is what the front end receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "weight must be positive"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// User input failed validation (400)
    ValidationError,

    /// Request JSON doesn't match the command's shape (400)
    InvalidArguments,

    /// No command with that name (404)
    UnknownCommand,

    /// Randomness unavailable, nothing could be generated (503)
    EntropyUnavailable,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid-arguments error.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidArguments, message)
    }

    /// Creates an unknown-command error.
    pub fn unknown_command(name: &str) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, format!("Unknown command: {}", name))
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EntropySourceUnavailable { reason } => {
                tracing::error!("Entropy source unavailable: {}", reason);
                ApiError::new(
                    ErrorCode::EntropyUnavailable,
                    "Random number source unavailable, please try again",
                )
            }
            CoreError::WeightMismatch { digits, weights } => {
                tracing::error!(digits, weights, "Check digit table mismatch");
                ApiError::internal("Internal calculation error")
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::validation("weight must be positive");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "weight must be positive");
    }

    #[test]
    fn test_entropy_error_maps_to_entropy_code() {
        let err: ApiError = CoreError::entropy("offline").into();
        assert_eq!(err.code, ErrorCode::EntropyUnavailable);
        // The underlying reason stays in the logs
        assert!(!err.message.contains("offline"));
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "amount".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "amount must be positive");
    }

    #[test]
    fn test_display() {
        let err = ApiError::unknown_command("frobnicate");
        assert_eq!(err.to_string(), "[UnknownCommand] Unknown command: frobnicate");
    }
}
