//! # Password Module
//!
//! Configurable random password generation and a simple strength meter.
//!
//! ## Generation Flow
//! ```text
//! PasswordOptions
//!      │
//!      ▼
//! build pool from selected classes (minus look-alikes if requested)
//!      │
//!      ▼
//! one guaranteed character per selected class
//!      │
//!      ▼
//! fill up to `length` from the whole pool
//!      │
//!      ▼
//! Fisher–Yates shuffle  ──►  password
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::validation::validate_password_length;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters easily confused with one another.
pub const SIMILAR_CHARACTERS: &str = "il1Lo0O";

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

// =============================================================================
// Options
// =============================================================================

/// What the generated password may contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PasswordOptions {
    /// Number of characters, 4..=50.
    pub length: usize,

    /// Draw from `a-z`.
    pub include_lowercase: bool,

    /// Draw from `A-Z`.
    pub include_uppercase: bool,

    /// Draw from `0-9`.
    pub include_numbers: bool,

    /// Draw from `!@#$%^&*()_+-=[]{}|;:,.<>?`.
    pub include_symbols: bool,

    /// Drop `i l 1 L o 0 O` from every class.
    pub exclude_similar: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        PasswordOptions {
            length: DEFAULT_PASSWORD_LENGTH,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
        }
    }
}

impl PasswordOptions {
    /// The character classes enabled by these options.
    fn classes(&self) -> Vec<Vec<char>> {
        [
            (self.include_lowercase, LOWERCASE),
            (self.include_uppercase, UPPERCASE),
            (self.include_numbers, NUMBERS),
            (self.include_symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, set)| {
            set.chars()
                .filter(|c| !(self.exclude_similar && SIMILAR_CHARACTERS.contains(*c)))
                .collect()
        })
        .collect()
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Generates a password.
///
/// Every selected class contributes at least one character.
///
/// ## Errors
/// - `ValidationError::OutOfRange` if `length` is outside 4..=50
/// - `ValidationError::Required` if no character class is selected
///
/// ## Example
/// ```rust
/// use ferramentas_core::password::{generate_password, PasswordOptions};
///
/// let options = PasswordOptions { length: 16, ..Default::default() };
/// let password = generate_password(&options, &mut rand::rng()).unwrap();
/// assert_eq!(password.chars().count(), 16);
/// ```
pub fn generate_password<R: Rng + ?Sized>(options: &PasswordOptions, rng: &mut R) -> CoreResult<String> {
    validate_password_length(options.length)?;

    let classes = options.classes();
    if classes.is_empty() {
        return Err(ValidationError::Required {
            field: "character classes".to_string(),
        }
        .into());
    }

    let pool: Vec<char> = classes.iter().flatten().copied().collect();
    let mut chars: Vec<char> = Vec::with_capacity(options.length);

    for class in &classes {
        chars.push(class[rng.random_range(0..class.len())]);
    }
    while chars.len() < options.length {
        chars.push(pool[rng.random_range(0..pool.len())]);
    }

    chars.shuffle(rng);
    Ok(chars.into_iter().collect())
}

// =============================================================================
// Strength
// =============================================================================

/// Coarse strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

/// Result of [`password_strength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PasswordStrength {
    /// 0..=6
    pub score: u8,
    pub level: StrengthLevel,
}

/// Scores a password.
///
/// One point each for: length ≥ 8, length ≥ 12, a lowercase letter, an
/// uppercase letter, a digit, anything else. ≤ 2 is weak, ≤ 4 medium.
pub fn password_strength(password: &str) -> PasswordStrength {
    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|&&passed| passed).count() as u8;

    let level = match score {
        0..=2 => StrengthLevel::Weak,
        3..=4 => StrengthLevel::Medium,
        _ => StrengthLevel::Strong,
    };

    PasswordStrength { score, level }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_default_options() {
        let options = PasswordOptions::default();
        assert_eq!(options.length, 12);
        assert!(options.include_symbols);
        assert!(!options.exclude_similar);
    }

    #[test]
    fn test_generates_requested_length_with_every_class() {
        let mut rng = rng();
        for length in [4, 12, 50] {
            let options = PasswordOptions {
                length,
                ..Default::default()
            };
            let password = generate_password(&options, &mut rng).unwrap();
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn test_single_class() {
        let options = PasswordOptions {
            length: 20,
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: true,
            include_symbols: false,
            exclude_similar: false,
        };
        let password = generate_password(&options, &mut rng()).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_exclude_similar() {
        let options = PasswordOptions {
            length: 50,
            exclude_similar: true,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..50 {
            let password = generate_password(&options, &mut rng).unwrap();
            assert!(!password.chars().any(|c| SIMILAR_CHARACTERS.contains(c)), "{}", password);
        }
    }

    #[test]
    fn test_no_class_selected() {
        let options = PasswordOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        let err = generate_password(&options, &mut rng()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Required { .. })));
    }

    #[test]
    fn test_length_out_of_range() {
        let options = PasswordOptions {
            length: 3,
            ..Default::default()
        };
        assert!(generate_password(&options, &mut rng()).is_err());
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: PasswordOptions = serde_json::from_str(r#"{"length": 20, "includeSymbols": false}"#).unwrap();
        assert_eq!(options.length, 20);
        assert!(!options.include_symbols);
        assert!(options.include_lowercase);
    }

    #[test]
    fn test_strength() {
        assert_eq!(password_strength("abc").level, StrengthLevel::Weak);
        assert_eq!(password_strength("abc").score, 1);
        assert_eq!(password_strength("abcdefgh1").level, StrengthLevel::Medium);
        assert_eq!(password_strength("Abcdefgh1!").score, 5);
        assert_eq!(password_strength("Abcdefgh1!xy").level, StrengthLevel::Strong);
        assert_eq!(password_strength("Abcdefgh1!xy").score, 6);
        assert_eq!(password_strength("").score, 0);
    }
}
