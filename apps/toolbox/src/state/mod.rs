//! # State Module
//!
//! Long-lived state handed to the toolbox commands.
//!
//! Each command declares only the state it needs, same as a command that
//! needs nothing takes only its request.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Toolbox                                    │   │
//! │  │  Toolbox::new(config_state, clipboard_state)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴───────────────┐                          │
//! │               ▼                              ▼                          │
//! │  ┌──────────────────────┐       ┌──────────────────────────┐           │
//! │  │    ConfigState       │       │    ClipboardState        │           │
//! │  │                      │       │                          │           │
//! │  │  site_name           │       │  Mutex<Box<dyn           │           │
//! │  │  password length     │       │    Clipboard>>           │           │
//! │  │  currency pair       │       │                          │           │
//! │  └──────────────────────┘       └──────────────────────────┘           │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ConfigState: Read-only after initialization                         │
//! │  • ClipboardState: Protected by Mutex for exclusive access             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod clipboard;
mod config;

pub use clipboard::{Clipboard, ClipboardError, ClipboardState, MemoryClipboard, NoClipboard};
pub use config::ConfigState;
