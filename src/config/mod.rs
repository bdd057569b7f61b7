//! Configuration module.
//!
//! Precedence: defaults → config file → environment → CLI flags.

pub mod keybindings;
pub mod loader;
pub mod state_file;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ConfigError, ResolvedConfig, ThemeColors,
};
pub use state_file::{load_record, save_record, StateFileError};

/// Load and resolve configuration through every precedence layer.
///
/// # Errors
///
/// Returns an error if a config file exists but is unreadable or invalid.
pub fn resolve(
    config_path: Option<std::path::PathBuf>,
    cli: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let merged = merge_config(file)?;
    Ok(apply_cli_overrides(apply_env_overrides(merged), cli))
}
