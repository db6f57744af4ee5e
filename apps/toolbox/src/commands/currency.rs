//! # Currency Commands
//!
//! Fixed-rate currency converter.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use ferramentas_core::currency::{self, Currency};
use ferramentas_core::validation::parse_decimal;

use crate::error::ApiResult;
use crate::state::ConfigState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertCurrencyRequest {
    /// As typed, `.` or `,` decimal separator
    pub amount: String,

    /// ISO code, configured default when omitted
    #[serde(default)]
    pub from: Option<String>,

    /// ISO code, configured default when omitted
    #[serde(default)]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertCurrencyResponse {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
    pub converted: f64,

    /// e.g. "R$ 10.00 = $ 2.00"
    pub display: String,
}

/// Converts an amount between two currencies.
///
/// ## Errors
/// - `VALIDATION_ERROR` for an empty, non-numeric or non-positive amount
/// - `VALIDATION_ERROR` for an unknown currency code
pub fn convert_currency(
    config: &ConfigState,
    request: ConvertCurrencyRequest,
) -> ApiResult<ConvertCurrencyResponse> {
    let amount = parse_decimal("amount", &request.amount)?;
    let from = match request.from.as_deref() {
        Some(code) => Currency::from_str(code)?,
        None => config.default_from_currency,
    };
    let to = match request.to.as_deref() {
        Some(code) => Currency::from_str(code)?,
        None => config.default_to_currency,
    };

    debug!(%from, %to, "convert_currency command");

    let converted = currency::convert(amount, from, to)?;

    Ok(ConvertCurrencyResponse {
        amount,
        from,
        to,
        converted,
        display: format!("{} = {}", from.format(amount), to.format(converted)),
    })
}
