//! # Card Module
//!
//! Structural checks for payment card numbers: the Luhn checksum, issuing
//! network detection and the per-network length rule.
//!
//! ## Independent Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "4111 1111 1111 1111"                                                  │
//! │         │                                                               │
//! │         ├──► validate_card_number()  Luhn + 13..=19 digits   → bool     │
//! │         │                                                               │
//! │         ├──► detect_network()        prefix table            → Visa     │
//! │         │                                                               │
//! │         └──► inspect_card()          both of the above, with            │
//! │                                      length-vs-network reported         │
//! │                                      separately from the checksum       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::digits::clean;

/// Accepted cleaned length range for any card number.
pub const CARD_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 13..=19;

// =============================================================================
// Luhn
// =============================================================================

/// Luhn checksum over an all-digit string. Does not check length.
fn luhn_sum_ok(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = (b - b'0') as u32;
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Validates a card number with the Luhn algorithm.
///
/// ## Rules
/// - Cleaned length must be 13..=19
/// - Every second digit from the right is doubled (minus 9 when above 9)
/// - Valid iff the digit sum is a multiple of 10
///
/// ## Example
/// ```rust
/// use ferramentas_core::card::validate_card_number;
///
/// assert!(validate_card_number("4111 1111 1111 1111"));
/// assert!(!validate_card_number("4111111111111112"));
/// ```
pub fn validate_card_number(input: &str) -> bool {
    let digits = clean(input);
    CARD_LENGTH_RANGE.contains(&digits.len()) && luhn_sum_ok(&digits)
}

// =============================================================================
// Network
// =============================================================================

/// Card issuing network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CardNetwork {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    Jcb,
    DinersClub,
    Elo,
    Hipercard,
    Unknown,
}

const ELO_PREFIXES: [&str; 10] = [
    "4011", "4312", "4389", "4514", "4573", "455906", "504175", "627780", "636297", "636368",
];

const HIPERCARD_PREFIXES: [&str; 6] = ["606282", "637095", "637568", "637599", "637609", "637612"];

/// Numeric value of the first `n` digits, if there are that many.
fn prefix_value(digits: &str, n: usize) -> Option<u32> {
    digits.get(..n).and_then(|p| p.parse().ok())
}

fn prefix_in(digits: &str, n: usize, range: std::ops::RangeInclusive<u32>) -> bool {
    prefix_value(digits, n).is_some_and(|v| range.contains(&v))
}

impl CardNetwork {
    /// Lengths a number of this network is expected to have.
    pub fn expected_lengths(&self) -> &'static [usize] {
        match self {
            CardNetwork::Visa => &[13, 16, 19],
            CardNetwork::Mastercard => &[16],
            CardNetwork::AmericanExpress => &[15],
            CardNetwork::Discover => &[16],
            CardNetwork::Jcb => &[16],
            CardNetwork::DinersClub => &[14],
            CardNetwork::Elo | CardNetwork::Hipercard => &[16],
            CardNetwork::Unknown => &[13, 14, 15, 16, 17, 18, 19],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "Mastercard",
            CardNetwork::AmericanExpress => "American Express",
            CardNetwork::Discover => "Discover",
            CardNetwork::Jcb => "JCB",
            CardNetwork::DinersClub => "Diners Club",
            CardNetwork::Elo => "Elo",
            CardNetwork::Hipercard => "Hipercard",
            CardNetwork::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies the issuing network by digit prefix.
///
/// The table is checked top to bottom and the first match wins, so the
/// generic Visa rule (`4`) shadows Elo prefixes starting with `4`.
pub fn detect_network(input: &str) -> CardNetwork {
    let d = clean(input);

    if d.starts_with('4') {
        CardNetwork::Visa
    } else if prefix_in(&d, 2, 51..=55) || prefix_in(&d, 2, 22..=27) {
        CardNetwork::Mastercard
    } else if d.starts_with("34") || d.starts_with("37") {
        CardNetwork::AmericanExpress
    } else if d.starts_with("6011")
        || d.starts_with("65")
        || prefix_in(&d, 3, 644..=649)
        || prefix_in(&d, 6, 622126..=622925)
    {
        CardNetwork::Discover
    } else if d.starts_with("35") || d.starts_with("2131") || d.starts_with("1800") {
        CardNetwork::Jcb
    } else if prefix_in(&d, 3, 300..=305) || d.starts_with("36") || d.starts_with("38") {
        CardNetwork::DinersClub
    } else if ELO_PREFIXES.iter().any(|p| d.starts_with(p)) {
        CardNetwork::Elo
    } else if HIPERCARD_PREFIXES.iter().any(|p| d.starts_with(p)) {
        CardNetwork::Hipercard
    } else {
        CardNetwork::Unknown
    }
}

// =============================================================================
// Report
// =============================================================================

/// Full structural report on a card number.
///
/// `luhn_valid` and `length_matches_network` are independent: a number can
/// pass the checksum with the wrong length for its network, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CardReport {
    pub network: CardNetwork,

    /// Number of digits after cleaning.
    pub digit_count: usize,

    /// Result of [`validate_card_number`].
    pub luhn_valid: bool,

    /// Cleaned length is one of `network.expected_lengths()`.
    pub length_matches_network: bool,
}

impl CardReport {
    /// Both checks passed.
    pub fn is_valid(&self) -> bool {
        self.luhn_valid && self.length_matches_network
    }
}

/// Runs every card check on `input`.
pub fn inspect_card(input: &str) -> CardReport {
    let digits = clean(input);
    let network = detect_network(&digits);

    CardReport {
        network,
        digit_count: digits.len(),
        luhn_valid: validate_card_number(&digits),
        length_matches_network: network.expected_lengths().contains(&digits.len()),
    }
}

/// Groups digits in fours: `4111 1111 1111 1111`.
pub fn format_card_number(input: &str) -> String {
    let digits = clean(input);
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
