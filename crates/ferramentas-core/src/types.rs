//! # Domain Types
//!
//! Value types for the fiscal identifier engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Fiscal Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DocumentKind   │   │    FiscalId     │   │   FormattedId   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Cpf  (11)      │──►│  kind           │──►│  "###.###.###-##│       │
//! │  │  Cnpj (14)      │   │  digits         │   │  "##.###.###/   │       │
//! │  │  weights, mask  │   │  (always valid) │   │   ####-##"      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Semantics
//! None of these types has identity beyond its value: two `FiscalId`s with
//! equal digits are interchangeable.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::check_digit::{CNPJ_FIRST_WEIGHTS, CNPJ_SECOND_WEIGHTS, CPF_FIRST_WEIGHTS, CPF_SECOND_WEIGHTS};
use crate::digits::DigitSequence;

// =============================================================================
// Document Kind
// =============================================================================

/// Which Brazilian taxpayer document a digit sequence represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DocumentKind {
    /// Individual taxpayer (11 digits).
    Cpf,

    /// Company taxpayer (14 digits, `0001` branch code for the head office).
    Cnpj,
}

/// Branch code of the head establishment.
pub const HEAD_OFFICE_BRANCH: [u8; 4] = [0, 0, 0, 1];

impl DocumentKind {
    /// Total number of digits, check digits included.
    #[inline]
    pub const fn len(&self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Number of digits before the two check digits.
    #[inline]
    pub const fn base_len(&self) -> usize {
        self.len() - 2
    }

    /// Number of base digits drawn at random when generating.
    #[inline]
    pub const fn random_len(&self) -> usize {
        self.base_len() - self.fixed_suffix().len()
    }

    /// Base digits that are fixed rather than random when generating.
    pub const fn fixed_suffix(&self) -> &'static [u8] {
        match self {
            DocumentKind::Cpf => &[],
            DocumentKind::Cnpj => &HEAD_OFFICE_BRANCH,
        }
    }

    pub const fn first_weights(&self) -> &'static [u32] {
        match self {
            DocumentKind::Cpf => &CPF_FIRST_WEIGHTS,
            DocumentKind::Cnpj => &CNPJ_FIRST_WEIGHTS,
        }
    }

    pub const fn second_weights(&self) -> &'static [u32] {
        match self {
            DocumentKind::Cpf => &CPF_SECOND_WEIGHTS,
            DocumentKind::Cnpj => &CNPJ_SECOND_WEIGHTS,
        }
    }

    /// Digit group sizes of the display mask.
    pub const fn groups(&self) -> &'static [usize] {
        match self {
            DocumentKind::Cpf => &[3, 3, 3, 2],
            DocumentKind::Cnpj => &[2, 3, 3, 4, 2],
        }
    }

    /// Separators placed between consecutive groups.
    pub const fn separators(&self) -> &'static [char] {
        match self {
            DocumentKind::Cpf => &['.', '.', '-'],
            DocumentKind::Cnpj => &['.', '.', '/', '-'],
        }
    }

    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    /// Picks the kind whose digit count equals `len`.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            11 => Some(DocumentKind::Cpf),
            14 => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Fiscal Id
// =============================================================================

/// A complete, valid CPF or CNPJ.
///
/// ## Invariant
/// `digits.len() == kind.len()` and both check digits match. Values are only
/// produced by the generator or by [`FiscalId::parse`], which validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FiscalId {
    kind: DocumentKind,
    digits: DigitSequence,
}

impl FiscalId {
    /// Caller guarantees the invariant.
    pub(crate) fn new_unchecked(kind: DocumentKind, digits: DigitSequence) -> Self {
        debug_assert_eq!(digits.len(), kind.len());
        FiscalId { kind, digits }
    }

    /// Parses and validates `input` as a document of `kind`.
    ///
    /// Returns `None` for anything the validator rejects.
    ///
    /// ## Example
    /// ```rust
    /// use ferramentas_core::{DocumentKind, FiscalId};
    ///
    /// let cpf = FiscalId::parse(DocumentKind::Cpf, "111.444.777-35").unwrap();
    /// assert_eq!(cpf.to_string(), "11144477735");
    /// assert!(FiscalId::parse(DocumentKind::Cpf, "111.444.777-36").is_none());
    /// ```
    pub fn parse(kind: DocumentKind, input: &str) -> Option<Self> {
        let digits = DigitSequence::parse(input);
        if crate::fiscal::validate_digits(kind, &digits) {
            Some(FiscalId { kind, digits })
        } else {
            None
        }
    }

    #[inline]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    #[inline]
    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> [u8; 2] {
        let d = self.digits.as_slice();
        [d[d.len() - 2], d[d.len() - 1]]
    }

    /// Display form with punctuation. Always succeeds.
    pub fn formatted(&self) -> FormattedId {
        FormattedId(crate::fiscal::mask_prefix(
            self.kind,
            &self.digits.to_string(),
        ))
    }
}

impl fmt::Display for FiscalId {
    /// Raw digits, no punctuation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.digits, f)
    }
}

// =============================================================================
// Formatted Id
// =============================================================================

/// Punctuated display string of a fiscal identifier.
///
/// Presentation only; never parsed back as a source of truth without cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormattedId(String);

impl FormattedId {
    pub(crate) fn new(value: String) -> Self {
        FormattedId(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
