//! # Document Commands
//!
//! CPF/CNPJ generator, validator and input mask.
//!
//! ## Page Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Gerador de CPF                                                         │
//! │                                                                         │
//! │  [ Gerar ] ───────► generate_document({ kind: "cpf" })                  │
//! │                        → { digits: "11144477735",                       │
//! │                            formatted: "111.444.777-35" }                │
//! │                                                                         │
//! │  Validador                                                              │
//! │  ┌──────────────────────┐                                               │
//! │  │ 111.444.7█           │ ── keyup ──► format_document({ partial })     │
//! │  └──────────────────────┘ ── submit ─► validate_document({ input })     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ferramentas_core::{fiscal, DigitSource, DocumentKind, OsDigitSource};

use crate::error::ApiResult;

// =============================================================================
// Generate
// =============================================================================

/// Request for [`generate_document`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDocumentRequest {
    pub kind: DocumentKind,
}

/// A generated or formatted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub kind: DocumentKind,

    /// Digits only
    pub digits: String,

    /// With punctuation
    pub formatted: String,
}

/// Generates a valid CPF or CNPJ from the OS random source.
///
/// ## Errors
/// - `ENTROPY_UNAVAILABLE` if the OS random source fails
pub fn generate_document(request: GenerateDocumentRequest) -> ApiResult<DocumentResponse> {
    generate_document_with(OsDigitSource, request)
}

/// [`generate_document`] with an explicit digit source.
pub fn generate_document_with(
    source: impl DigitSource,
    request: GenerateDocumentRequest,
) -> ApiResult<DocumentResponse> {
    debug!(kind = %request.kind, "generate_document command");

    let id = fiscal::generate(request.kind, source)?;

    info!(kind = %id.kind(), "Document generated");

    Ok(DocumentResponse {
        kind: id.kind(),
        digits: id.to_string(),
        formatted: id.formatted().into_string(),
    })
}

// =============================================================================
// Validate
// =============================================================================

/// Request for [`validate_document`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDocumentRequest {
    pub input: String,

    /// Guessed from the digit count when omitted
    #[serde(default)]
    pub kind: Option<DocumentKind>,
}

/// Verdict for a typed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDocumentResponse {
    /// `None` when no kind was given and the digit count matches neither
    pub kind: Option<DocumentKind>,

    pub valid: bool,

    /// Input with punctuation, or unchanged when the digit count is wrong
    pub formatted: String,
}

/// Validates a CPF or CNPJ.
///
/// An invalid document is a successful response with `valid: false`.
pub fn validate_document(request: ValidateDocumentRequest) -> ApiResult<ValidateDocumentResponse> {
    debug!(kind = ?request.kind, "validate_document command");

    let kind = request.kind.or_else(|| fiscal::detect_kind(&request.input));

    let response = match kind {
        Some(kind) => ValidateDocumentResponse {
            kind: Some(kind),
            valid: fiscal::validate(kind, &request.input),
            formatted: fiscal::format(kind, &request.input),
        },
        None => ValidateDocumentResponse {
            kind: None,
            valid: false,
            formatted: request.input,
        },
    };

    Ok(response)
}

// =============================================================================
// Format
// =============================================================================

/// Request for [`format_document`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatDocumentRequest {
    pub kind: DocumentKind,
    pub input: String,

    /// Mask whatever has been typed so far
    #[serde(default)]
    pub partial: bool,
}

/// Result of [`format_document`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatDocumentResponse {
    pub formatted: String,

    /// The input holds exactly `kind.len()` digits
    pub complete: bool,
}

/// Applies the CPF/CNPJ mask.
///
/// ## Modes
/// - `partial: true`: progressive mask for a field being typed into
/// - `partial: false`: full mask, input unchanged when the count is wrong
pub fn format_document(request: FormatDocumentRequest) -> ApiResult<FormatDocumentResponse> {
    let full = fiscal::try_format(request.kind, &request.input);
    let complete = full.is_some();

    let formatted = match (request.partial, full) {
        (_, Some(formatted)) => formatted.into_string(),
        (true, None) => fiscal::format_partial(request.kind, &request.input),
        (false, None) => request.input,
    };

    Ok(FormatDocumentResponse { formatted, complete })
}
