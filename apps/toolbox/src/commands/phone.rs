//! # Phone Commands
//!
//! Brazilian phone number checker.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ferramentas_core::phone::{self, PhoneReport};

use crate::error::ApiResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePhoneRequest {
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePhoneResponse {
    #[serde(flatten)]
    pub report: PhoneReport,

    pub valid: bool,

    /// One line per issue, ready for display
    pub messages: Vec<String>,

    /// `(11) 98765-4321`, or the input when the digit count is wrong
    pub formatted: String,
}

/// Validates a phone number and lists every rule it breaks.
pub fn validate_phone(request: ValidatePhoneRequest) -> ApiResult<ValidatePhoneResponse> {
    let report = phone::validate_phone(&request.phone);

    debug!(kind = ?report.kind, issues = report.issues.len(), "validate_phone command");

    Ok(ValidatePhoneResponse {
        valid: report.is_valid(),
        messages: report.issues.iter().map(|i| i.message().to_string()).collect(),
        formatted: phone::format_phone(&request.phone),
        report,
    })
}
