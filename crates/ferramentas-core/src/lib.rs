//! # ferramentas-core: Pure Logic for the Ferramentas Tools
//!
//! This crate holds the logic behind every Ferramentas tool as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ferramentas Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web front end (static pages)                 │   │
//! │  │   CPF/CNPJ form ─ Card form ─ Phone form ─ BMI ─ Password ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ invoke(command, json)                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    toolbox (command layer)                      │   │
//! │  │    generate_document, validate_document, inspect_card, ...      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ ferramentas-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  fiscal  │ │   card   │ │  phone   │ │  email   │          │   │
//! │  │   │ CPF/CNPJ │ │   Luhn   │ │   DDD    │ │  regex   │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐                       │   │
//! │  │   │   bmi    │ │ password │ │ currency │                       │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘                       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • RANDOMNESS IS INJECTED             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`fiscal`] - CPF/CNPJ generation, validation, formatting
//! - [`check_digit`] - The shared modulo-11 primitive
//! - [`digits`] - Cleaning and `DigitSequence`
//! - [`entropy`] - Injected random-digit sources
//! - [`types`] - `DocumentKind`, `FiscalId`, `FormattedId`
//! - [`card`] - Luhn and card network detection
//! - [`phone`], [`email`] - Structural validators with issue lists
//! - [`bmi`], [`currency`], [`password`] - Calculators and generators
//! - [`validation`] - Input guards for the calculators
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Validation and formatting are deterministic
//! 2. **Invalid is an answer**: A bad CPF is `false`, not an `Err`
//! 3. **Generation round-trips**: Generated documents always validate
//! 4. **Explicit Errors**: Hard failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ferramentas_core::entropy::OsDigitSource;
//! use ferramentas_core::fiscal;
//!
//! let cnpj = fiscal::generate_cnpj(OsDigitSource).unwrap();
//! assert!(fiscal::validate_cnpj(cnpj.formatted().as_str()));
//!
//! assert!(fiscal::validate_cpf("111.444.777-35"));
//! assert!(!fiscal::validate_cpf("00000000000"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bmi;
pub mod card;
pub mod check_digit;
pub mod currency;
pub mod digits;
pub mod email;
pub mod entropy;
pub mod error;
pub mod fiscal;
pub mod password;
pub mod phone;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use digits::{clean, DigitSequence};
pub use entropy::{DigitSource, OsDigitSource};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::{DocumentKind, FiscalId, FormattedId};
