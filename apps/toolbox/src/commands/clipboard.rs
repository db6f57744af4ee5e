//! # Clipboard Commands
//!
//! Backs every "Copiar" button on the site.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::{ClipboardState, ConfigState};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyTextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyTextResponse {
    pub copied: bool,

    /// How long to show the "copied!" feedback; 0 when nothing was copied
    pub feedback_ms: u64,
}

/// Copies text to the clipboard.
///
/// Never fails: a clipboard error is logged and reported as `copied: false`.
pub fn copy_text(
    clipboard: &ClipboardState,
    config: &ConfigState,
    request: CopyTextRequest,
) -> ApiResult<CopyTextResponse> {
    debug!(chars = request.text.chars().count(), "copy_text command");

    let copied = clipboard.copy(&request.text);

    Ok(CopyTextResponse {
        copied,
        feedback_ms: if copied { config.copy_feedback_ms } else { 0 },
    })
}
