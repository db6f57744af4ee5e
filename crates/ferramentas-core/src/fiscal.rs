//! # Fiscal Identifier Engine
//!
//! Generation, validation, cleaning and formatting of CPF and CNPJ numbers.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fiscal Identifier Engine                           │
//! │                                                                         │
//! │  generate(kind, source) ──► random base digits                          │
//! │                             (+ "0001" for CNPJ)                         │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                          check_digits() ◄───────────┐                   │
//! │                                   │                 │ same tables,      │
//! │                                   ▼                 │ same remainder    │
//! │                               FiscalId              │ policy            │
//! │                                                     │                   │
//! │  validate(kind, text) ──► clean ──► length? ──► repeated? ──► recompute │
//! │                                                                         │
//! │  format(kind, text)   ──► clean ──► mask, or pass-through              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ferramentas_core::entropy::OsDigitSource;
//! use ferramentas_core::fiscal::{format_cpf, generate_cpf, validate_cpf};
//!
//! let cpf = generate_cpf(&mut OsDigitSource).unwrap();
//! assert!(validate_cpf(&cpf.to_string()));
//!
//! assert_eq!(format_cpf("11144477735"), "111.444.777-35");
//! assert!(!validate_cpf("111.444.777-36"));
//! ```

use tracing::debug;

use crate::check_digit::check_digits;
use crate::digits::{clean, DigitSequence};
use crate::entropy::DigitSource;
use crate::error::{CoreError, CoreResult};
use crate::types::{DocumentKind, FiscalId, FormattedId};

// =============================================================================
// Generation
// =============================================================================

/// Generates a valid document of `kind`.
///
/// Draws `kind.random_len()` digits from `source`, appends the fixed suffix
/// (branch `0001` for CNPJ) and both check digits. A result whose digits are
/// all identical (`11111111111` is arithmetically valid) is discarded and
/// drawn again, so the output always passes [`validate`].
///
/// ## Errors
/// `CoreError::EntropySourceUnavailable` if `source` fails.
pub fn generate(kind: DocumentKind, mut source: impl DigitSource) -> CoreResult<FiscalId> {
    loop {
        let digits = draw_candidate(kind, &mut source)?;
        if digits.is_repeated() {
            debug!(%kind, "discarding degenerate candidate");
            continue;
        }

        debug!(%kind, "generated fiscal id");
        return Ok(FiscalId::new_unchecked(kind, digits));
    }
}

fn draw_candidate(kind: DocumentKind, source: &mut impl DigitSource) -> CoreResult<DigitSequence> {
    let mut digits = Vec::with_capacity(kind.len());
    for _ in 0..kind.random_len() {
        digits.push(source.next_digit()?);
    }
    digits.extend_from_slice(kind.fixed_suffix());

    let [first, second] = check_digits(&digits, kind.first_weights(), kind.second_weights())?;
    digits.push(first);
    digits.push(second);

    DigitSequence::from_digits(digits).ok_or_else(|| CoreError::entropy("source produced a non-digit value"))
}

/// Generates a valid CPF.
pub fn generate_cpf(source: impl DigitSource) -> CoreResult<FiscalId> {
    generate(DocumentKind::Cpf, source)
}

/// Generates a valid CNPJ for a head office (branch `0001`).
pub fn generate_cnpj(source: impl DigitSource) -> CoreResult<FiscalId> {
    generate(DocumentKind::Cnpj, source)
}

// =============================================================================
// Validation
// =============================================================================

/// Validates arbitrary text as a document of `kind`.
///
/// ## Rules (checked in order, first failure answers `false`)
/// 1. Cleaned length equals `kind.len()`
/// 2. Not all digits identical
/// 3. First check digit matches
/// 4. Second check digit matches
///
/// Malformed input is never an error, only `false`.
pub fn validate(kind: DocumentKind, input: &str) -> bool {
    validate_digits(kind, &DigitSequence::parse(input))
}

pub(crate) fn validate_digits(kind: DocumentKind, digits: &DigitSequence) -> bool {
    if digits.len() != kind.len() {
        return false;
    }

    if digits.is_repeated() {
        return false;
    }

    let d = digits.as_slice();
    let base = &d[..kind.base_len()];
    match check_digits(base, kind.first_weights(), kind.second_weights()) {
        Ok([first, second]) => d[kind.base_len()] == first && d[kind.base_len() + 1] == second,
        Err(_) => false,
    }
}

/// Validates a CPF (`###.###.###-##` or bare digits).
///
/// ## Example
/// ```rust
/// use ferramentas_core::fiscal::validate_cpf;
///
/// assert!(validate_cpf("11144477735"));
/// assert!(!validate_cpf("11144477736"));
/// assert!(!validate_cpf("00000000000"));
/// ```
pub fn validate_cpf(input: &str) -> bool {
    validate(DocumentKind::Cpf, input)
}

/// Validates a CNPJ (`##.###.###/####-##` or bare digits).
pub fn validate_cnpj(input: &str) -> bool {
    validate(DocumentKind::Cnpj, input)
}

/// Guesses the document kind from the cleaned digit count.
///
/// Says nothing about validity.
pub fn detect_kind(input: &str) -> Option<DocumentKind> {
    DocumentKind::from_len(clean(input).len())
}

// =============================================================================
// Formatting
// =============================================================================

/// Masks as many digits as are present, never more than `kind.len()`.
pub(crate) fn mask_prefix(kind: DocumentKind, digits: &str) -> String {
    let mut out = String::with_capacity(kind.len() + kind.separators().len());
    let mut rest = &digits[..digits.len().min(kind.len())];

    for (i, &size) in kind.groups().iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        if i > 0 {
            out.push(kind.separators()[i - 1]);
        }
        let take = size.min(rest.len());
        out.push_str(&rest[..take]);
        rest = &rest[take..];
    }

    out
}

/// Formats `input` when it cleans to exactly `kind.len()` digits.
///
/// Returns `None` otherwise: the explicit "not formattable" signal.
pub fn try_format(kind: DocumentKind, input: &str) -> Option<FormattedId> {
    let digits = clean(input);
    if digits.len() == kind.len() {
        Some(FormattedId::new(mask_prefix(kind, &digits)))
    } else {
        None
    }
}

/// Formats `input`, or returns it unchanged when the digit count is wrong.
pub fn format(kind: DocumentKind, input: &str) -> String {
    match try_format(kind, input) {
        Some(formatted) => formatted.into_string(),
        None => input.to_string(),
    }
}

/// `###.###.###-##`, pass-through on wrong length.
pub fn format_cpf(input: &str) -> String {
    format(DocumentKind::Cpf, input)
}

/// `##.###.###/####-##`, pass-through on wrong length.
pub fn format_cnpj(input: &str) -> String {
    format(DocumentKind::Cnpj, input)
}

/// Progressive mask for an input field being typed into.
///
/// Separators appear only once the next group has started; digits beyond
/// `kind.len()` are dropped.
///
/// ## Example
/// ```rust
/// use ferramentas_core::DocumentKind;
/// use ferramentas_core::fiscal::format_partial;
///
/// assert_eq!(format_partial(DocumentKind::Cpf, "1114"), "111.4");
/// assert_eq!(format_partial(DocumentKind::Cnpj, "112223330001"), "11.222.333/0001");
/// ```
pub fn format_partial(kind: DocumentKind, input: &str) -> String {
    mask_prefix(kind, &clean(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{RngDigitSource, ScriptedDigitSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_known_cpf_vectors() {
        assert!(validate_cpf("11144477735"));
        assert!(validate_cpf("111.444.777-35"));
        assert!(!validate_cpf("11144477736"));
        assert!(!validate_cpf("11144477725"));
    }

    #[test]
    fn test_known_cnpj_vectors() {
        assert!(validate_cnpj("11222333000181"));
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(!validate_cnpj("11222333000182"));
        assert!(!validate_cnpj("11222333000191"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            let cnpj = d.to_string().repeat(14);
            assert!(!validate_cpf(&cpf), "{} should be rejected", cpf);
            assert!(!validate_cnpj(&cnpj), "{} should be rejected", cnpj);
        }
    }

    #[test]
    fn test_length_sensitivity() {
        assert!(!validate_cpf("1234567890"));
        assert!(!validate_cpf("123456789012"));
        assert!(!validate_cpf(""));
        assert!(!validate_cnpj("1122233300018"));
        assert!(!validate_cnpj("112223330001810"));
        // A valid CPF is not a valid CNPJ and vice versa
        assert!(!validate_cnpj("11144477735"));
        assert!(!validate_cpf("11222333000181"));
    }

    #[test]
    fn test_garbage_is_false_not_error() {
        assert!(!validate_cpf("not a cpf"));
        assert!(!validate_cnpj("🙂🙂🙂"));
    }

    #[test]
    fn test_generate_cpf_from_script_hits_known_vector() {
        let mut source = ScriptedDigitSource::new(vec![1, 1, 1, 4, 4, 4, 7, 7, 7]);
        let cpf = generate_cpf(&mut source).unwrap();
        assert_eq!(cpf.to_string(), "11144477735");
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_generate_cnpj_uses_eight_draws_and_head_office_branch() {
        let mut source = ScriptedDigitSource::new(vec![1, 1, 2, 2, 2, 3, 3, 3]);
        let cnpj = generate_cnpj(&mut source).unwrap();
        assert_eq!(cnpj.to_string(), "11222333000181");
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_generate_redraws_degenerate_cpf() {
        // 111111111 yields 11111111111, which is arithmetically valid but rejected
        let mut script = vec![1; 9];
        script.extend([1, 1, 1, 4, 4, 4, 7, 7, 7]);
        let mut source = ScriptedDigitSource::new(script);
        let cpf = generate_cpf(&mut source).unwrap();
        assert_eq!(cpf.to_string(), "11144477735");
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_generate_surfaces_entropy_failure() {
        let source = ScriptedDigitSource::new(vec![1, 2, 3]);
        let err = generate_cpf(source).unwrap_err();
        assert!(matches!(err, CoreError::EntropySourceUnavailable { .. }));
    }

    #[test]
    fn test_generated_ids_validate() {
        let mut source = RngDigitSource::new(StdRng::seed_from_u64(2024));
        for _ in 0..500 {
            let cpf = generate_cpf(&mut source).unwrap();
            let cnpj = generate_cnpj(&mut source).unwrap();
            assert!(validate_cpf(&cpf.to_string()), "{}", cpf);
            assert!(validate_cnpj(&cnpj.to_string()), "{}", cnpj);
            assert_eq!(&cnpj.digits().as_slice()[8..12], &[0, 0, 0, 1]);
        }
    }

    #[test]
    fn test_detect_kind() {
        assert_eq!(detect_kind("111.444.777-35"), Some(DocumentKind::Cpf));
        assert_eq!(detect_kind("11.222.333/0001-81"), Some(DocumentKind::Cnpj));
        assert_eq!(detect_kind("123"), None);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_cpf("11144477735"), "111.444.777-35");
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
        // Already formatted input is normalised
        assert_eq!(format_cpf("111 444 777 35"), "111.444.777-35");
    }

    #[test]
    fn test_format_passes_through_wrong_length() {
        assert_eq!(format_cpf("1114447773"), "1114447773");
        assert_eq!(format_cnpj("abc-12"), "abc-12");
    }

    #[test]
    fn test_try_format_signals_not_formattable() {
        assert!(try_format(DocumentKind::Cpf, "123").is_none());
        assert_eq!(
            try_format(DocumentKind::Cpf, "11144477735").unwrap().as_str(),
            "111.444.777-35"
        );
    }

    #[test]
    fn test_format_partial() {
        assert_eq!(format_partial(DocumentKind::Cpf, ""), "");
        assert_eq!(format_partial(DocumentKind::Cpf, "111"), "111");
        assert_eq!(format_partial(DocumentKind::Cpf, "1114"), "111.4");
        assert_eq!(format_partial(DocumentKind::Cpf, "1114447773"), "111.444.777-3");
        assert_eq!(format_partial(DocumentKind::Cpf, "111444777359999"), "111.444.777-35");
        assert_eq!(format_partial(DocumentKind::Cnpj, "112"), "11.2");
        assert_eq!(format_partial(DocumentKind::Cnpj, "1122233300018"), "11.222.333/0001-8");
    }
}
