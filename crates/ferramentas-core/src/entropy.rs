//! # Entropy Module
//!
//! Random-digit providers injected into the document generators.
//!
//! ## Providers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      DigitSource implementations                        │
//! │                                                                         │
//! │  OsDigitSource          OS CSPRNG, fallible (production default)       │
//! │  RngDigitSource<R>      any rand::Rng (seeded StdRng in tests)         │
//! │  ScriptedDigitSource    replays fixed digits, errors when exhausted    │
//! │                                                                         │
//! │  All yield uniformly distributed values in 0..=9                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

use crate::error::{CoreError, CoreResult};

/// A source of uniformly distributed decimal digits.
pub trait DigitSource {
    /// Draws one digit in `0..=9`.
    ///
    /// ## Errors
    /// `CoreError::EntropySourceUnavailable` when no randomness can be obtained.
    fn next_digit(&mut self) -> CoreResult<u8>;
}

impl<S: DigitSource + ?Sized> DigitSource for &mut S {
    fn next_digit(&mut self) -> CoreResult<u8> {
        (**self).next_digit()
    }
}

// =============================================================================
// OS CSPRNG
// =============================================================================

/// Draws digits from the operating system's CSPRNG.
///
/// Bytes are rejection-sampled (values ≥ 250 are redrawn) so every digit is
/// equally likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDigitSource;

impl DigitSource for OsDigitSource {
    fn next_digit(&mut self) -> CoreResult<u8> {
        let mut byte = [0u8; 1];
        loop {
            OsRng.try_fill_bytes(&mut byte).map_err(CoreError::entropy)?;
            if byte[0] < 250 {
                return Ok(byte[0] % 10);
            }
        }
    }
}

// =============================================================================
// Any rand::Rng
// =============================================================================

/// Adapts an infallible `rand::Rng` into a [`DigitSource`].
#[derive(Debug, Clone)]
pub struct RngDigitSource<R>(R);

impl<R: Rng> RngDigitSource<R> {
    pub fn new(rng: R) -> Self {
        RngDigitSource(rng)
    }
}

impl<R: Rng> DigitSource for RngDigitSource<R> {
    fn next_digit(&mut self) -> CoreResult<u8> {
        Ok(self.0.random_range(0..10u8))
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Replays a fixed list of digits, in order.
///
/// Used to pin generator output to known vectors. Running out of digits is
/// reported as `EntropySourceUnavailable`, which makes it the simplest way to
/// exercise that error path too.
#[derive(Debug, Clone)]
pub struct ScriptedDigitSource {
    digits: Vec<u8>,
    position: usize,
}

impl ScriptedDigitSource {
    pub fn new(digits: impl Into<Vec<u8>>) -> Self {
        ScriptedDigitSource {
            digits: digits.into(),
            position: 0,
        }
    }

    /// Digits not yet handed out.
    pub fn remaining(&self) -> usize {
        self.digits.len() - self.position
    }
}

impl DigitSource for ScriptedDigitSource {
    fn next_digit(&mut self) -> CoreResult<u8> {
        let digit = *self
            .digits
            .get(self.position)
            .ok_or_else(|| CoreError::entropy("scripted digits exhausted"))?;
        if digit > 9 {
            return Err(CoreError::entropy(format!("scripted value {} is not a digit", digit)));
        }
        self.position += 1;
        Ok(digit)
    }
}
