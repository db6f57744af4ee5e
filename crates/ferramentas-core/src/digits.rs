//! # Digits Module
//!
//! Cleaning of user-typed text and the `DigitSequence` value type every
//! numeric identifier in this crate is built on.
//!
//! ## Cleaning Flow
//! ```text
//! "111.444.777-35"  ──► clean() ──►  "11144477735"  ──► DigitSequence
//!  (what the user typed)             (digits only)      [1,1,1,4,4,4,7,7,7,3,5]
//! ```

use std::fmt;

/// Strips every character that is not an ASCII decimal digit.
///
/// Total function: never fails, empty input yields empty output.
///
/// ## Example
/// ```rust
/// use ferramentas_core::digits::clean;
///
/// assert_eq!(clean("111.444.777-35"), "11144477735");
/// assert_eq!(clean("abc"), "");
/// ```
pub fn clean(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

// =============================================================================
// DigitSequence
// =============================================================================

/// An ordered sequence of decimal digits.
///
/// ## Invariant
/// Every element is in `0..=9`. The only constructors are [`DigitSequence::parse`]
/// (which cleans text first) and [`DigitSequence::from_digits`] (which checks).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Builds a sequence from the digits found in `input`, ignoring everything else.
    pub fn parse(input: &str) -> Self {
        DigitSequence(
            input
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
        )
    }

    /// Builds a sequence from raw digit values.
    ///
    /// Returns `None` if any value is greater than 9.
    pub fn from_digits(digits: Vec<u8>) -> Option<Self> {
        if digits.iter().all(|&d| d <= 9) {
            Some(DigitSequence(digits))
        } else {
            None
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// True when the sequence is non-empty and every digit equals the first one.
    ///
    /// `00000000000`, `99999999999999` and friends.
    pub fn is_repeated(&self) -> bool {
        match self.0.split_first() {
            Some((first, rest)) => rest.iter().all(|d| d == first),
            None => false,
        }
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for DigitSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
