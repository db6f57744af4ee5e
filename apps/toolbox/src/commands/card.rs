//! # Card Commands
//!
//! Credit card number checker. Structural only: nothing is charged or
//! looked up.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ferramentas_core::card::{self, CardReport};

use crate::error::ApiResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectCardRequest {
    pub number: String,
}

/// Card checks plus display helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectCardResponse {
    #[serde(flatten)]
    pub report: CardReport,

    /// Both checks passed
    pub valid: bool,

    /// e.g. "Mastercard"
    pub network_label: String,

    /// Digit counts the detected network issues
    pub expected_lengths: Vec<usize>,

    /// Digits grouped in fours
    pub formatted: String,
}

/// Runs the Luhn check, the network classifier and the length check.
pub fn inspect_card(request: InspectCardRequest) -> ApiResult<InspectCardResponse> {
    let report = card::inspect_card(&request.number);

    debug!(
        network = %report.network,
        digit_count = report.digit_count,
        "inspect_card command"
    );

    Ok(InspectCardResponse {
        valid: report.is_valid(),
        network_label: report.network.label().to_string(),
        expected_lengths: report.network.expected_lengths().to_vec(),
        formatted: card::format_card_number(&request.number),
        report,
    })
}
