//! # Ferramentas Toolbox Library
//!
//! Command layer between the Ferramentas pages and `ferramentas-core`.
//! A web/WASM host forwards each page event as `invoke(command, json)`.
//!
//! ## Module Organization
//! ```text
//! ferramentas_toolbox/
//! ├── lib.rs          ◄─── You are here (Toolbox facade, dispatch, tracing)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── clipboard.rs◄─── Clipboard collaborator
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── document.rs ◄─── CPF/CNPJ commands
//! │   ├── card.rs     ◄─── Card commands
//! │   └── ...         ◄─── One file per tool
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example
//! ```rust
//! use ferramentas_toolbox::Toolbox;
//! use serde_json::json;
//!
//! let toolbox = Toolbox::default();
//! let res = toolbox
//!     .invoke("validate_document", json!({ "input": "111.444.777-35" }))
//!     .unwrap();
//! assert_eq!(res["valid"], true);
//! ```

pub mod commands;
pub mod error;
pub mod state;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use error::{ApiError, ApiResult};
use state::{ClipboardState, ConfigState};

/// Every command name [`Toolbox::invoke`] accepts.
pub const COMMANDS: [&str; 12] = [
    "generate_document",
    "validate_document",
    "format_document",
    "inspect_card",
    "validate_phone",
    "validate_email",
    "calculate_bmi",
    "generate_password",
    "password_strength",
    "convert_currency",
    "copy_text",
    "get_config",
];

/// Holds the toolbox state and routes commands to it.
#[derive(Debug, Default)]
pub struct Toolbox {
    config: ConfigState,
    clipboard: ClipboardState,
}

impl Toolbox {
    pub fn new(config: ConfigState, clipboard: ClipboardState) -> Self {
        Toolbox { config, clipboard }
    }

    /// Toolbox with configuration from `FERRAMENTAS_*` variables and no
    /// clipboard.
    pub fn from_env() -> Self {
        let config = ConfigState::from_env();
        info!(site_name = %config.site_name, "Toolbox initialized");
        Toolbox::new(config, ClipboardState::default())
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Runs a command by name.
    ///
    /// ## Errors
    /// - `UNKNOWN_COMMAND` if `command` isn't in [`COMMANDS`]
    /// - `INVALID_ARGUMENTS` if `args` doesn't match the command's request
    /// - whatever the command itself returns
    pub fn invoke(&self, command: &str, args: Value) -> ApiResult<Value> {
        debug!(command, "invoke");

        let result = match command {
            "generate_document" => call(args, commands::document::generate_document),
            "validate_document" => call(args, commands::document::validate_document),
            "format_document" => call(args, commands::document::format_document),
            "inspect_card" => call(args, commands::card::inspect_card),
            "validate_phone" => call(args, commands::phone::validate_phone),
            "validate_email" => call(args, commands::email::validate_email),
            "calculate_bmi" => call(args, commands::bmi::calculate_bmi),
            "generate_password" => call(args, |req| {
                commands::password::generate_password(&self.config, req)
            }),
            "password_strength" => call(args, commands::password::password_strength),
            "convert_currency" => call(args, |req| {
                commands::currency::convert_currency(&self.config, req)
            }),
            "copy_text" => call(args, |req| {
                commands::clipboard::copy_text(&self.clipboard, &self.config, req)
            }),
            "get_config" => to_json(commands::config::get_config(&self.config)),
            _ => Err(ApiError::unknown_command(command)),
        };

        if let Err(e) = &result {
            warn!(command, code = ?e.code, "Command failed: {}", e.message);
        }

        result
    }
}

/// Deserializes `args`, runs `f`, serializes the response.
fn call<Req, Res>(args: Value, f: impl FnOnce(Req) -> ApiResult<Res>) -> ApiResult<Value>
where
    Req: DeserializeOwned,
    Res: Serialize,
{
    // Commands without parameters may be invoked with no args at all
    let args = if args.is_null() { Value::Object(Default::default()) } else { args };

    let request = serde_json::from_value(args).map_err(|e| ApiError::invalid_arguments(e.to_string()))?;
    to_json(f(request)?)
}

fn to_json(response: impl Serialize) -> ApiResult<Value> {
    serde_json::to_value(response).map_err(|e| {
        tracing::error!("Response serialization failed: {}", e);
        ApiError::internal("Failed to serialize response")
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ferramentas_core=trace` - Show trace for the core only
/// - Default: INFO, DEBUG for the ferramentas crates
///
/// Calling it again once a subscriber is installed does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ferramentas_core=debug,ferramentas_toolbox=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::MemoryClipboard;
    use serde_json::json;

    #[test]
    fn test_generate_then_validate() {
        let toolbox = Toolbox::default();

        for kind in ["cpf", "cnpj"] {
            let generated = toolbox.invoke("generate_document", json!({ "kind": kind })).unwrap();
            let verdict = toolbox
                .invoke("validate_document", json!({ "input": generated["formatted"] }))
                .unwrap();

            assert_eq!(verdict["kind"], kind);
            assert_eq!(verdict["valid"], true);
        }
    }

    #[test]
    fn test_known_vectors() {
        let toolbox = Toolbox::default();

        let ok = toolbox.invoke("validate_document", json!({ "input": "11144477735" })).unwrap();
        assert_eq!(ok["valid"], true);
        let bad = toolbox.invoke("validate_document", json!({ "input": "11144477736" })).unwrap();
        assert_eq!(bad["valid"], false);

        let card = toolbox.invoke("inspect_card", json!({ "number": "4111111111111111" })).unwrap();
        assert_eq!(card["network"], "visa");
        assert_eq!(card["valid"], true);
    }

    #[test]
    fn test_unknown_command() {
        let err = Toolbox::default().invoke("frobnicate", Value::Null).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_invalid_arguments() {
        let toolbox = Toolbox::default();

        let err = toolbox.invoke("generate_document", json!({ "kind": "rg" })).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArguments);

        let err = toolbox.invoke("calculate_bmi", json!({ "weight": "70" })).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArguments);
    }

    #[test]
    fn test_validation_error_surfaces() {
        let err = Toolbox::default()
            .invoke("calculate_bmi", json!({ "weight": "0", "height": "175" }))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_null_args_for_optional_requests() {
        let toolbox = Toolbox::default();

        let res = toolbox.invoke("generate_password", Value::Null).unwrap();
        assert_eq!(res["password"].as_str().unwrap().chars().count(), 12);

        let config = toolbox.invoke("get_config", Value::Null).unwrap();
        assert_eq!(config["siteName"], "Ferramentas Online");
    }

    #[test]
    fn test_copy_uses_clipboard_state() {
        let memory = MemoryClipboard::new();
        let toolbox = Toolbox::new(ConfigState::default(), ClipboardState::new(memory.clone()));

        let res = toolbox.invoke("copy_text", json!({ "text": "111.444.777-35" })).unwrap();
        assert_eq!(res["copied"], true);
        assert_eq!(memory.contents().as_deref(), Some("111.444.777-35"));
    }

    #[test]
    fn test_every_listed_command_is_routed() {
        let toolbox = Toolbox::default();
        for command in COMMANDS {
            if let Err(e) = toolbox.invoke(command, json!({})) {
                assert_ne!(e.code, ErrorCode::UnknownCommand, "{}", command);
            }
        }
    }

    #[test]
    fn test_from_env_loads_config() {
        init_tracing();
        let toolbox = Toolbox::from_env();

        assert_eq!(toolbox.config(), &ConfigState::from_env());
        let config = toolbox.invoke("get_config", Value::Null).unwrap();
        assert_eq!(config["siteName"], toolbox.config().site_name.as_str());
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
