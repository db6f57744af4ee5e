//! # E-mail Commands

use serde::{Deserialize, Serialize};
use tracing::debug;

use ferramentas_core::email::{self, EmailInfo, EmailReport};

use crate::error::ApiResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateEmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateEmailResponse {
    #[serde(flatten)]
    pub report: EmailReport,

    pub valid: bool,
    pub messages: Vec<String>,

    /// Only for valid addresses
    pub info: Option<EmailInfo>,
}

/// Validates an e-mail address and, when valid, describes its domain.
pub fn validate_email(request: ValidateEmailRequest) -> ApiResult<ValidateEmailResponse> {
    let report = email::validate_email(&request.email);
    let valid = report.is_valid();

    debug!(valid, issues = report.issues.len(), "validate_email command");

    Ok(ValidateEmailResponse {
        valid,
        messages: report.issues.iter().map(|i| i.message().to_string()).collect(),
        info: if valid { email::email_info(&request.email) } else { None },
        report,
    })
}
