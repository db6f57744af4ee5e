//! # Configuration State
//!
//! Stores toolbox configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FERRAMENTAS_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use ferramentas_core::currency::Currency;
use ferramentas_core::password::DEFAULT_PASSWORD_LENGTH;
use ferramentas_core::validation::validate_password_length;

/// Toolbox configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Site name (page titles, share text)
    pub site_name: String,

    /// Password length used when a request doesn't specify options
    pub default_password_length: usize,

    /// Source currency preselected in the converter
    pub default_from_currency: Currency,

    /// Target currency preselected in the converter
    pub default_to_currency: Currency,

    /// How long the "copied!" feedback stays on screen, in milliseconds
    pub copy_feedback_ms: u64,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Site: "Ferramentas Online"
    /// - Password length: 12
    /// - Currency pair: BRL → USD
    /// - Copy feedback: 2 seconds
    fn default() -> Self {
        ConfigState {
            site_name: "Ferramentas Online".to_string(),
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_from_currency: Currency::Brl,
            default_to_currency: Currency::Usd,
            copy_feedback_ms: 2000,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FERRAMENTAS_SITE_NAME`: Override site name
    /// - `FERRAMENTAS_PASSWORD_LENGTH`: Default password length (4..=50)
    /// - `FERRAMENTAS_CURRENCY_FROM`: Default source currency (e.g., "BRL")
    /// - `FERRAMENTAS_CURRENCY_TO`: Default target currency (e.g., "USD")
    /// - `FERRAMENTAS_COPY_FEEDBACK_MS`: Copy feedback duration
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(site_name) = lookup("FERRAMENTAS_SITE_NAME") {
            config.site_name = site_name;
        }

        if let Some(length_str) = lookup("FERRAMENTAS_PASSWORD_LENGTH") {
            match length_str.trim().parse::<usize>() {
                Ok(length) if validate_password_length(length).is_ok() => {
                    config.default_password_length = length;
                }
                _ => warn!(value = %length_str, "Ignoring invalid FERRAMENTAS_PASSWORD_LENGTH"),
            }
        }

        if let Some(code) = lookup("FERRAMENTAS_CURRENCY_FROM") {
            match Currency::from_str(&code) {
                Ok(currency) => config.default_from_currency = currency,
                Err(e) => warn!(error = %e, "Ignoring FERRAMENTAS_CURRENCY_FROM"),
            }
        }

        if let Some(code) = lookup("FERRAMENTAS_CURRENCY_TO") {
            match Currency::from_str(&code) {
                Ok(currency) => config.default_to_currency = currency,
                Err(e) => warn!(error = %e, "Ignoring FERRAMENTAS_CURRENCY_TO"),
            }
        }

        if let Some(ms_str) = lookup("FERRAMENTAS_COPY_FEEDBACK_MS") {
            match ms_str.trim().parse::<u64>() {
                Ok(ms) => config.copy_feedback_ms = ms,
                Err(_) => warn!(value = %ms_str, "Ignoring invalid FERRAMENTAS_COPY_FEEDBACK_MS"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.default_password_length, 12);
        assert_eq!(config.default_from_currency, Currency::Brl);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("FERRAMENTAS_SITE_NAME", "Minhas Ferramentas"),
            ("FERRAMENTAS_PASSWORD_LENGTH", "20"),
            ("FERRAMENTAS_CURRENCY_FROM", "eur"),
            ("FERRAMENTAS_CURRENCY_TO", "JPY"),
            ("FERRAMENTAS_COPY_FEEDBACK_MS", "500"),
        ]));

        assert_eq!(config.site_name, "Minhas Ferramentas");
        assert_eq!(config.default_password_length, 20);
        assert_eq!(config.default_from_currency, Currency::Eur);
        assert_eq!(config.default_to_currency, Currency::Jpy);
        assert_eq!(config.copy_feedback_ms, 500);
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("FERRAMENTAS_PASSWORD_LENGTH", "200"),
            ("FERRAMENTAS_CURRENCY_FROM", "XYZ"),
            ("FERRAMENTAS_COPY_FEEDBACK_MS", "soon"),
        ]));

        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_unparseable_feedback_keeps_default() {
        let config = ConfigState::from_lookup(lookup_from(&[("FERRAMENTAS_COPY_FEEDBACK_MS", "-5")]));
        assert_eq!(config.copy_feedback_ms, 2000);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["siteName"], "Ferramentas Online");
        assert_eq!(json["defaultFromCurrency"], "BRL");
        assert_eq!(json["copyFeedbackMs"], 2000);
    }
}
