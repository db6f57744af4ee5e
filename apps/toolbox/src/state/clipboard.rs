//! # Clipboard State
//!
//! Wraps the host's clipboard behind a `Mutex` so the toolbox stays
//! `Send + Sync`.
//!
//! ## Copy Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Copy Button                                          │
//! │                                                                         │
//! │  Click "Copiar" ─────► copy_text() ─────► ClipboardState::copy()        │
//! │                                                 │                       │
//! │                                ┌────────────────┴──────────────┐        │
//! │                                ▼                               ▼        │
//! │                           Ok(()) ──► copied: true      Err ──► warn!    │
//! │                                                          copied: false  │
//! │                                                                         │
//! │  NOTE: A failed copy never becomes an ApiError. The page just skips     │
//! │        the "copied!" feedback.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::warn;

/// Failure reported by a clipboard backend.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The host has no clipboard (headless, permission denied).
    #[error("clipboard unavailable")]
    Unavailable,

    /// The host refused the write.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Something text can be copied to.
pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard for hosts without one. Every write fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// In-process clipboard. Keeps the last copied text.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text. Clones share the same contents.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// Shared clipboard collaborator.
pub struct ClipboardState {
    clipboard: Mutex<Box<dyn Clipboard>>,
}

impl ClipboardState {
    pub fn new(clipboard: impl Clipboard + 'static) -> Self {
        ClipboardState {
            clipboard: Mutex::new(Box::new(clipboard)),
        }
    }

    /// Copies `text`. Returns whether it worked; failures are logged.
    pub fn copy(&self, text: &str) -> bool {
        let mut clipboard = match self.clipboard.lock() {
            Ok(guard) => guard,
            Err(_) => {
                warn!("Clipboard mutex poisoned, skipping copy");
                return false;
            }
        };

        match clipboard.write_text(text) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Copy to clipboard failed");
                false
            }
        }
    }
}

impl Default for ClipboardState {
    fn default() -> Self {
        Self::new(NoClipboard)
    }
}

impl std::fmt::Debug for ClipboardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_last_copy() {
        let clipboard = MemoryClipboard::new();
        let state = ClipboardState::new(clipboard.clone());

        assert!(state.copy("111.444.777-35"));
        assert!(state.copy("11.222.333/0001-81"));
        assert_eq!(clipboard.contents().as_deref(), Some("11.222.333/0001-81"));
    }

    #[test]
    fn test_failed_copy_returns_false() {
        let state = ClipboardState::default();
        assert!(!state.copy("anything"));
    }

    #[test]
    fn test_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClipboardState>();
    }
}
