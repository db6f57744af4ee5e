//! # E-mail Module
//!
//! Structural e-mail address checks. No DNS or mailbox verification.
//!
//! Every failed rule is reported, in the order below, so the form can show
//! the full list:
//! ```text
//!  format (regex) → single "@" → local part → domain → TLD → total length
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use ts_rs::TS;

/// Practical subset of RFC 5322: atext local part, LDH domain labels.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("static e-mail pattern compiles")
});

const MAX_LOCAL_LENGTH: usize = 64;
const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_EMAIL_LENGTH: usize = 320;

/// Free-mail providers recognised by [`email_info`].
pub const COMMON_PROVIDERS: [&str; 10] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "terra.com.br",
    "uol.com.br",
    "bol.com.br",
    "ig.com.br",
    "globo.com",
];

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum EmailIssue {
    Empty,
    InvalidFormat,
    AtCount,
    EmptyLocalPart,
    LocalPartTooLong,
    LocalPartDotEdge,
    ConsecutiveDots,
    EmptyDomain,
    DomainTooLong,
    DomainWithoutDot,
    DomainEdge,
    TldTooShort,
    TooLong,
}

impl EmailIssue {
    pub fn message(&self) -> &'static str {
        match self {
            EmailIssue::Empty => "E-mail cannot be empty",
            EmailIssue::InvalidFormat => "Invalid e-mail format",
            EmailIssue::AtCount => "E-mail must contain exactly one @ symbol",
            EmailIssue::EmptyLocalPart => "Local part (before @) cannot be empty",
            EmailIssue::LocalPartTooLong => "Local part (before @) is too long (max 64 characters)",
            EmailIssue::LocalPartDotEdge => "Local part cannot start or end with a dot",
            EmailIssue::ConsecutiveDots => "Local part cannot contain consecutive dots",
            EmailIssue::EmptyDomain => "Domain (after @) cannot be empty",
            EmailIssue::DomainTooLong => "Domain is too long (max 253 characters)",
            EmailIssue::DomainWithoutDot => "Domain must contain at least one dot",
            EmailIssue::DomainEdge => "Domain cannot start or end with a hyphen or dot",
            EmailIssue::TldTooShort => "TLD must have at least 2 characters",
            EmailIssue::TooLong => "E-mail is too long (max 320 characters)",
        }
    }
}

/// Outcome of [`validate_email`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmailReport {
    pub issues: Vec<EmailIssue>,
}

impl EmailReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validates the structure of an e-mail address.
///
/// ## Example
/// ```rust
/// use ferramentas_core::email::{validate_email, EmailIssue};
///
/// assert!(validate_email("ana@example.com.br").is_valid());
/// assert!(validate_email("ana..maria@example.com").issues.contains(&EmailIssue::ConsecutiveDots));
/// ```
pub fn validate_email(input: &str) -> EmailReport {
    if input.trim().is_empty() {
        return EmailReport {
            issues: vec![EmailIssue::Empty],
        };
    }

    let mut issues = Vec::new();

    if !EMAIL_PATTERN.is_match(input) {
        issues.push(EmailIssue::InvalidFormat);
    }

    if input.matches('@').count() != 1 {
        issues.push(EmailIssue::AtCount);
    }

    if let Some((local, domain)) = input.split_once('@').filter(|(_, d)| !d.contains('@')) {
        let local_len = local.chars().count();
        if local_len == 0 {
            issues.push(EmailIssue::EmptyLocalPart);
        } else if local_len > MAX_LOCAL_LENGTH {
            issues.push(EmailIssue::LocalPartTooLong);
        }

        if local.starts_with('.') || local.ends_with('.') {
            issues.push(EmailIssue::LocalPartDotEdge);
        }

        if local.contains("..") {
            issues.push(EmailIssue::ConsecutiveDots);
        }

        let domain_len = domain.chars().count();
        if domain_len == 0 {
            issues.push(EmailIssue::EmptyDomain);
        } else if domain_len > MAX_DOMAIN_LENGTH {
            issues.push(EmailIssue::DomainTooLong);
        }

        if !domain.contains('.') {
            issues.push(EmailIssue::DomainWithoutDot);
        }

        if domain.starts_with(['-', '.']) || domain.ends_with(['-', '.']) {
            issues.push(EmailIssue::DomainEdge);
        }

        let tld = domain.rsplit('.').next().unwrap_or_default();
        if tld.chars().count() < 2 {
            issues.push(EmailIssue::TldTooShort);
        }
    }

    if input.chars().count() > MAX_EMAIL_LENGTH {
        issues.push(EmailIssue::TooLong);
    }

    EmailReport { issues }
}

/// Domain facts about an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmailInfo {
    /// Lowercased domain.
    pub domain: String,
    pub tld: String,
    pub is_common_provider: bool,
}

/// Splits out the domain of an address with exactly one `@`.
pub fn email_info(input: &str) -> Option<EmailInfo> {
    let (_, domain) = input.split_once('@')?;
    if domain.contains('@') {
        return None;
    }

    let domain = domain.to_lowercase();
    let tld = domain.rsplit('.').next().unwrap_or_default().to_string();
    let is_common_provider = COMMON_PROVIDERS.contains(&domain.as_str());

    Some(EmailInfo {
        domain,
        tld,
        is_common_provider,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for email in ["ana@example.com", "first.last+tag@sub.example.com.br", "x_y@a-b.io"] {
            let report = validate_email(email);
            assert!(report.is_valid(), "{}: {:?}", email, report.issues);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_email("   ").issues, vec![EmailIssue::Empty]);
    }

    #[test]
    fn test_at_count() {
        let report = validate_email("ana.example.com");
        assert!(report.issues.contains(&EmailIssue::AtCount));
        assert!(report.issues.contains(&EmailIssue::InvalidFormat));

        let report = validate_email("a@b@example.com");
        assert!(report.issues.contains(&EmailIssue::AtCount));
        // Local/domain rules only run with exactly one "@"
        assert!(!report.issues.contains(&EmailIssue::EmptyLocalPart));
    }

    #[test]
    fn test_local_part_rules() {
        assert!(validate_email("@example.com").issues.contains(&EmailIssue::EmptyLocalPart));
        assert!(validate_email(".ana@example.com").issues.contains(&EmailIssue::LocalPartDotEdge));
        assert!(validate_email("ana..m@example.com").issues.contains(&EmailIssue::ConsecutiveDots));

        let long = format!("{}@example.com", "a".repeat(65));
        assert!(validate_email(&long).issues.contains(&EmailIssue::LocalPartTooLong));
    }

    #[test]
    fn test_domain_rules() {
        let report = validate_email("ana@localhost");
        assert_eq!(report.issues, vec![EmailIssue::DomainWithoutDot]);

        assert!(validate_email("ana@").issues.contains(&EmailIssue::EmptyDomain));
        assert!(validate_email("ana@-example.com").issues.contains(&EmailIssue::DomainEdge));
        assert!(validate_email("ana@example.c").issues.contains(&EmailIssue::TldTooShort));
    }

    #[test]
    fn test_too_long() {
        let email = format!("ana@{}.com", "a".repeat(330));
        let report = validate_email(&email);
        assert!(report.issues.contains(&EmailIssue::TooLong));
        assert!(report.issues.contains(&EmailIssue::DomainTooLong));
    }

    #[test]
    fn test_email_info() {
        let info = email_info("Ana@GMAIL.com").unwrap();
        assert_eq!(info.domain, "gmail.com");
        assert_eq!(info.tld, "com");
        assert!(info.is_common_provider);

        let info = email_info("contato@empresa.com.br").unwrap();
        assert_eq!(info.tld, "br");
        assert!(!info.is_common_provider);

        assert!(email_info("no-at-sign").is_none());
        assert!(email_info("a@b@c").is_none());
    }
}
