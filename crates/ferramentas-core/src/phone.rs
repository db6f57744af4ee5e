//! # Phone Module
//!
//! Structural validation of Brazilian phone numbers (landline and mobile).
//!
//! ## Number Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Landline (10 digits):   (DD) NXXX-XXXX     N ∉ {0, 1}                  │
//! │  Mobile   (11 digits):   (DD) 9NXXX-XXXX    N ∉ {0, 1}                  │
//! │                                                                         │
//! │  DD = area code (DDD), must be an allocated Brazilian code             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike the document validators, every failed rule is collected so the UI
//! can list all of them at once.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::digits::{clean, DigitSequence};

/// Allocated Brazilian area codes (DDD).
pub const AREA_CODES: [&str; 67] = [
    "11", "12", "13", "14", "15", "16", "17", "18", "19", // SP
    "21", "22", "24", // RJ
    "27", "28", // ES
    "31", "32", "33", "34", "35", "37", "38", // MG
    "41", "42", "43", "44", "45", "46", // PR
    "47", "48", "49", // SC
    "51", "53", "54", "55", // RS
    "61", // DF
    "62", "64", // GO
    "63", // TO
    "65", "66", // MT
    "67", // MS
    "68", // AC
    "69", // RO
    "71", "73", "74", "75", "77", // BA
    "79", // SE
    "81", "87", // PE
    "82", // AL
    "83", // PB
    "84", // RN
    "85", "88", // CE
    "86", "89", // PI
    "91", "93", "94", // PA
    "92", "97", // AM
    "95", // RR
    "96", // AP
    "98", "99", // MA
];

/// Line type inferred from the digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PhoneKind {
    Landline,
    Mobile,
    Invalid,
}

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum PhoneIssue {
    /// Not 10 or 11 digits.
    WrongLength,
    UnknownAreaCode,
    /// Landline subscriber number starts with 0 or 1.
    InvalidLandlinePrefix,
    /// Mobile subscriber number doesn't start with 9.
    MobileMissingNine,
    /// Mobile subscriber number's second digit is 0 or 1.
    InvalidMobileSecondDigit,
    RepeatedDigits,
}

impl PhoneIssue {
    pub fn message(&self) -> &'static str {
        match self {
            PhoneIssue::WrongLength => "Phone number must have 10 or 11 digits",
            PhoneIssue::UnknownAreaCode => "Invalid area code",
            PhoneIssue::InvalidLandlinePrefix => "First digit after the area code cannot be 0 or 1",
            PhoneIssue::MobileMissingNine => "Mobile numbers must start with 9 after the area code",
            PhoneIssue::InvalidMobileSecondDigit => "Second digit after the area code cannot be 0 or 1",
            PhoneIssue::RepeatedDigits => "Phone number cannot have all digits equal",
        }
    }
}

/// Outcome of [`validate_phone`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PhoneReport {
    pub kind: PhoneKind,
    pub issues: Vec<PhoneIssue>,
}

impl PhoneReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validates a Brazilian phone number.
///
/// ## Example
/// ```rust
/// use ferramentas_core::phone::{validate_phone, PhoneKind};
///
/// let report = validate_phone("(11) 98765-4321");
/// assert!(report.is_valid());
/// assert_eq!(report.kind, PhoneKind::Mobile);
/// ```
pub fn validate_phone(input: &str) -> PhoneReport {
    let digits = DigitSequence::parse(input);
    let d = digits.as_slice();

    if d.len() != 10 && d.len() != 11 {
        return PhoneReport {
            kind: PhoneKind::Invalid,
            issues: vec![PhoneIssue::WrongLength],
        };
    }

    let mut issues = Vec::new();

    let area_code = format!("{}{}", d[0], d[1]);
    if !AREA_CODES.contains(&area_code.as_str()) {
        issues.push(PhoneIssue::UnknownAreaCode);
    }

    let subscriber = &d[2..];
    let kind = if d.len() == 10 {
        if subscriber[0] <= 1 {
            issues.push(PhoneIssue::InvalidLandlinePrefix);
        }
        PhoneKind::Landline
    } else {
        if subscriber[0] != 9 {
            issues.push(PhoneIssue::MobileMissingNine);
        }
        if subscriber[1] <= 1 {
            issues.push(PhoneIssue::InvalidMobileSecondDigit);
        }
        PhoneKind::Mobile
    };

    if digits.is_repeated() {
        issues.push(PhoneIssue::RepeatedDigits);
    }

    PhoneReport { kind, issues }
}

/// `(11) 1234-5678` for landlines, `(11) 98765-4321` for mobiles.
///
/// Any other digit count is returned unchanged.
pub fn format_phone(input: &str) -> String {
    let d = clean(input);
    match d.len() {
        10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        11 => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        _ => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        let report = validate_phone("1132345678");
        assert_eq!(report.kind, PhoneKind::Landline);
        assert!(report.is_valid());

        let report = validate_phone("(21) 98765-4321");
        assert_eq!(report.kind, PhoneKind::Mobile);
        assert!(report.is_valid());
    }

    #[test]
    fn test_wrong_length_is_the_only_issue() {
        let report = validate_phone("123");
        assert_eq!(report.kind, PhoneKind::Invalid);
        assert_eq!(report.issues, vec![PhoneIssue::WrongLength]);

        // Country code included: 13 digits
        let report = validate_phone("+55 (21) 98765-4321");
        assert_eq!(report.issues, vec![PhoneIssue::WrongLength]);
    }

    #[test]
    fn test_unknown_area_code() {
        let report = validate_phone("2032345678");
        assert_eq!(report.issues, vec![PhoneIssue::UnknownAreaCode]);
    }

    #[test]
    fn test_landline_prefix() {
        let report = validate_phone("1112345678");
        assert_eq!(report.issues, vec![PhoneIssue::InvalidLandlinePrefix]);
    }

    #[test]
    fn test_mobile_rules_are_collected() {
        let report = validate_phone("11812345678");
        assert_eq!(
            report.issues,
            vec![PhoneIssue::MobileMissingNine, PhoneIssue::InvalidMobileSecondDigit]
        );
    }

    #[test]
    fn test_mobile_second_digit() {
        // 9 present, but a mobile's second subscriber digit can't be 0 or 1
        let report = validate_phone("11912345678");
        assert_eq!(report.kind, PhoneKind::Mobile);
        assert_eq!(report.issues, vec![PhoneIssue::InvalidMobileSecondDigit]);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_repeated_digits() {
        let report = validate_phone("11111111111");
        assert!(report.issues.contains(&PhoneIssue::RepeatedDigits));
        // 11 is a valid area code, but "1" is not 9 for a mobile
        assert!(report.issues.contains(&PhoneIssue::MobileMissingNine));
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("1132345678"), "(11) 3234-5678");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn test_area_codes_are_unique_two_digit() {
        for (i, code) in AREA_CODES.iter().enumerate() {
            assert_eq!(code.len(), 2);
            assert!(!AREA_CODES[i + 1..].contains(code), "duplicate {}", code);
        }
    }
}
