//! # BMI Commands
//!
//! Body mass index calculator. Accepts the raw text fields so `1,75`
//! and `1.75` both work.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ferramentas_core::bmi::{self, BmiReport};
use ferramentas_core::validation::parse_decimal;

use crate::error::ApiResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateBmiRequest {
    /// Kilograms
    pub weight: String,

    /// Centimetres
    pub height: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateBmiResponse {
    #[serde(flatten)]
    pub report: BmiReport,

    /// BMI with one decimal, e.g. "22.9"
    pub display: String,
}

/// Computes and classifies the BMI.
///
/// ## Errors
/// - `VALIDATION_ERROR` if either field is empty, not a number, or not positive
pub fn calculate_bmi(request: CalculateBmiRequest) -> ApiResult<CalculateBmiResponse> {
    debug!("calculate_bmi command");

    let weight = parse_decimal("weight", &request.weight)?;
    let height = parse_decimal("height", &request.height)?;
    let report = bmi::calculate_bmi(weight, height)?;

    Ok(CalculateBmiResponse {
        display: format!("{:.1}", report.bmi),
        report,
    })
}
