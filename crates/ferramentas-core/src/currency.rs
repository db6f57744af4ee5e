//! # Currency Module
//!
//! Currency conversion over a fixed table of demonstration rates.
//!
//! ## Conversion Path
//! ```text
//! amount (from) ──► ÷ rate(from) ──► BRL ──► × rate(to) ──► amount (to)
//! ```
//!
//! Rates are expressed as "units of the currency per 1 BRL" and are not live
//! quotes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::validation::validate_positive;

/// Supported currencies (ISO 4217).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Currency {
    Brl,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Cny,
    Chf,
    Mxn,
}

impl Currency {
    pub const ALL: [Currency; 10] = [
        Currency::Brl,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Cad,
        Currency::Aud,
        Currency::Cny,
        Currency::Chf,
        Currency::Mxn,
    ];

    /// Units of this currency per 1 BRL.
    pub const fn rate(&self) -> f64 {
        match self {
            Currency::Brl => 1.0,
            Currency::Usd => 0.2,
            Currency::Eur => 0.18,
            Currency::Gbp => 0.16,
            Currency::Jpy => 29.5,
            Currency::Cad => 0.27,
            Currency::Aud => 0.3,
            Currency::Cny => 1.45,
            Currency::Chf => 0.18,
            Currency::Mxn => 3.6,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Cny => "CNY",
            Currency::Chf => "CHF",
            Currency::Mxn => "MXN",
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
            Currency::Cny => "¥",
            Currency::Chf => "CHF",
            Currency::Mxn => "$",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Currency::Brl => "Brazilian Real",
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "Pound Sterling",
            Currency::Jpy => "Japanese Yen",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
            Currency::Cny => "Chinese Yuan",
            Currency::Chf => "Swiss Franc",
            Currency::Mxn => "Mexican Peso",
        }
    }

    /// Decimal places shown for this currency.
    pub const fn display_decimals(&self) -> usize {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// `R$ 10.50`, `¥ 1475`.
    pub fn format(&self, value: f64) -> String {
        format!("{} {:.*}", self.symbol(), self.display_decimals(), value)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    /// Case-insensitive ISO code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "currency".to_string(),
                allowed: Currency::ALL.iter().map(|c| c.code().to_string()).collect(),
            })
    }
}

/// Converts `amount` from one currency to another.
///
/// ## Errors
/// `ValidationError` unless `amount` is finite and positive.
///
/// ## Example
/// ```rust
/// use ferramentas_core::currency::{convert, Currency};
///
/// let usd = convert(100.0, Currency::Brl, Currency::Usd).unwrap();
/// assert!((usd - 20.0).abs() < 1e-9);
/// ```
pub fn convert(amount: f64, from: Currency, to: Currency) -> CoreResult<f64> {
    let amount = validate_positive("amount", amount)?;
    Ok(amount / from.rate() * to.rate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        assert!((convert(1.0, Currency::Brl, Currency::Jpy).unwrap() - 29.5).abs() < 1e-9);
        assert!((convert(20.0, Currency::Usd, Currency::Brl).unwrap() - 100.0).abs() < 1e-9);
        // USD → EUR goes through BRL: 10 / 0.2 * 0.18
        assert!((convert(10.0, Currency::Usd, Currency::Eur).unwrap() - 9.0).abs() < 1e-9);
        assert!((convert(7.0, Currency::Gbp, Currency::Gbp).unwrap() - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_rejects_non_positive() {
        assert!(convert(0.0, Currency::Brl, Currency::Usd).is_err());
        assert!(convert(-5.0, Currency::Brl, Currency::Usd).is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(Currency::Brl.format(10.5), "R$ 10.50");
        assert_eq!(Currency::Jpy.format(1475.4), "¥ 1475");
        assert_eq!(Currency::Chf.format(0.18), "CHF 0.18");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
        let err = "XYZ".parse::<Currency>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { ref allowed, .. } if allowed.len() == 10));
    }

    #[test]
    fn test_serde_uses_iso_codes() {
        assert_eq!(serde_json::to_string(&Currency::Mxn).unwrap(), "\"MXN\"");
        let c: Currency = serde_json::from_str("\"CHF\"").unwrap();
        assert_eq!(c, Currency::Chf);
    }
}
