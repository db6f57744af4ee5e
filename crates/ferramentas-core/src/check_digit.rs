//! # Check Digit Module
//!
//! The weighted modulo-11 primitive shared by CPF and CNPJ, plus their
//! weight tables.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  weighted_sum = Σ digit[i] × weight[i]                                  │
//! │  remainder    = weighted_sum mod 11                                     │
//! │  check digit  = 0            if remainder < 2                           │
//! │                 11 - remainder otherwise                                │
//! │                                                                         │
//! │  Applied twice: once over the base digits, then again over the base    │
//! │  digits plus the first check digit.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generation and validation both go through [`check_digits`], which is what
//! guarantees a generated identifier always validates.

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Weight Tables
// =============================================================================

/// CPF first pass (9 base digits).
pub const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CPF second pass (9 base digits + first check digit).
pub const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ first pass (12 base digits, branch suffix included).
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ second pass (12 base digits + first check digit).
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

// =============================================================================
// Primitive
// =============================================================================

/// Maps a modulo-11 remainder to a check digit.
///
/// Remainders 0 and 1 both become `0`; `11 - remainder` would otherwise be
/// 11 or 10, neither of which is a digit.
#[inline]
pub const fn digit_from_remainder(remainder: u32) -> u8 {
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Computes a single check digit over `digits` using `weights`.
///
/// ## Errors
/// `CoreError::WeightMismatch` if the slices differ in length.
///
/// ## Example
/// ```rust
/// use ferramentas_core::check_digit::{check_digit, CPF_FIRST_WEIGHTS};
///
/// let base = [1, 1, 1, 4, 4, 4, 7, 7, 7];
/// assert_eq!(check_digit(&base, &CPF_FIRST_WEIGHTS).unwrap(), 3);
/// ```
pub fn check_digit(digits: &[u8], weights: &[u32]) -> CoreResult<u8> {
    if digits.len() != weights.len() {
        return Err(CoreError::WeightMismatch {
            digits: digits.len(),
            weights: weights.len(),
        });
    }

    let weighted_sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| d as u32 * w)
        .sum();

    Ok(digit_from_remainder(weighted_sum % 11))
}

/// Computes both check digits for `base`.
///
/// The second pass runs over `base` extended with the first check digit, so
/// `second_weights` must be one element longer than `first_weights`.
pub fn check_digits(base: &[u8], first_weights: &[u32], second_weights: &[u32]) -> CoreResult<[u8; 2]> {
    let first = check_digit(base, first_weights)?;

    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);

    let second = check_digit(&extended, second_weights)?;
    Ok([first, second])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_zero_and_one_map_to_zero() {
        assert_eq!(digit_from_remainder(0), 0);
        assert_eq!(digit_from_remainder(1), 0);
        assert_eq!(digit_from_remainder(2), 9);
        assert_eq!(digit_from_remainder(10), 1);
    }

    #[test]
    fn test_remainder_policy_through_weighted_sum() {
        // 1×10 + 1×1 = 11 → remainder 0
        assert_eq!(check_digit(&[1, 1], &[10, 1]).unwrap(), 0);
        // 1×10 + 1×2 = 12 → remainder 1
        assert_eq!(check_digit(&[1, 1], &[10, 2]).unwrap(), 0);
        // 1×10 + 1×3 = 13 → remainder 2 → 9
        assert_eq!(check_digit(&[1, 1], &[10, 3]).unwrap(), 9);
    }

    #[test]
    fn test_cpf_known_vector() {
        let base = [1, 1, 1, 4, 4, 4, 7, 7, 7];
        let digits = check_digits(&base, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS).unwrap();
        assert_eq!(digits, [3, 5]);
    }

    #[test]
    fn test_cnpj_known_vector() {
        // 11.222.333/0001-81
        let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];
        let digits = check_digits(&base, &CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS).unwrap();
        assert_eq!(digits, [8, 1]);
    }

    #[test]
    fn test_weight_mismatch_is_an_error() {
        let err = check_digit(&[1, 2, 3], &CPF_FIRST_WEIGHTS).unwrap_err();
        assert!(matches!(
            err,
            CoreError::WeightMismatch {
                digits: 3,
                weights: 9
            }
        ));
    }

    #[test]
    fn test_deterministic() {
        let base = [5, 2, 9, 9, 8, 2, 2, 4, 7];
        let a = check_digits(&base, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS).unwrap();
        let b = check_digits(&base, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS).unwrap();
        assert_eq!(a, b);
    }
}
