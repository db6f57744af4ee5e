//! # Toolbox Commands Module
//!
//! All commands exposed to the web front end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── document.rs   ◄─── CPF/CNPJ generate, validate, format
//! ├── card.rs       ◄─── Luhn + card network
//! ├── phone.rs      ◄─── Brazilian phone numbers
//! ├── email.rs      ◄─── E-mail structure
//! ├── bmi.rs        ◄─── BMI calculator
//! ├── password.rs   ◄─── Password generator + strength meter
//! ├── currency.rs   ◄─── Currency converter
//! ├── clipboard.rs  ◄─── "Copiar" buttons
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front end                                                              │
//! │  ─────────                                                              │
//! │  const res = await invoke('validate_document', {                        │
//! │    input: '111.444.777-35'                                              │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (JSON)                                                        │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  Toolbox::invoke("validate_document", args)                             │
//! │      └─► validate_document(ValidateDocumentRequest)                     │
//! │              -> Result<ValidateDocumentResponse, ApiError>              │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Front end receives: { kind: "cpf", valid: true, ... }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Needs nothing
//! fn inspect_card(request: InspectCardRequest)
//!
//! // Needs config defaults
//! fn generate_password(config: &ConfigState, request: GeneratePasswordRequest)
//!
//! // Needs the clipboard
//! fn copy_text(clipboard: &ClipboardState, config: &ConfigState, request: CopyTextRequest)
//! ```

pub mod bmi;
pub mod card;
pub mod clipboard;
pub mod config;
pub mod currency;
pub mod document;
pub mod email;
pub mod password;
pub mod phone;
