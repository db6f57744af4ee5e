//! # Config Commands
//!
//! Commands for retrieving toolbox configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current toolbox configuration.
///
/// ## When Used
/// - Page load (site name, converter defaults)
/// - Copy buttons (feedback duration)
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
