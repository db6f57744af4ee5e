//! # Password Commands
//!
//! Password generator and strength meter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ferramentas_core::password::{self, PasswordOptions, PasswordStrength};

use crate::error::ApiResult;
use crate::state::ConfigState;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePasswordRequest {
    /// All classes at the configured default length when omitted
    #[serde(default)]
    pub options: Option<PasswordOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePasswordResponse {
    pub password: String,
    pub strength: PasswordStrength,
}

/// Generates a password and scores it.
///
/// ## Errors
/// - `VALIDATION_ERROR` if the length is outside 4..=50 or no class is selected
pub fn generate_password(
    config: &ConfigState,
    request: GeneratePasswordRequest,
) -> ApiResult<GeneratePasswordResponse> {
    let options = request.options.unwrap_or_else(|| PasswordOptions {
        length: config.default_password_length,
        ..Default::default()
    });

    debug!(
        length = options.length,
        symbols = options.include_symbols,
        exclude_similar = options.exclude_similar,
        "generate_password command"
    );

    let password = password::generate_password(&options, &mut rand::rng())?;
    let strength = password::password_strength(&password);

    Ok(GeneratePasswordResponse { password, strength })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrengthRequest {
    pub password: String,
}

/// Scores a password typed by the user.
pub fn password_strength(request: PasswordStrengthRequest) -> ApiResult<PasswordStrength> {
    Ok(password::password_strength(&request.password))
}
