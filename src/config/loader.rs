//! Configuration file loading with precedence handling.

use crate::model::{LayoutMode, SelectionMode};
use crate::table_state::{Features, TableSettings};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GRIDKIT_CONFIG";

/// Environment variable overriding the layout policy.
pub const RESIZE_MODE_ENV_VAR: &str = "GRIDKIT_RESIZE_MODE";

/// Environment variable overriding the selection policy.
pub const SELECTION_MODE_ENV_VAR: &str = "GRIDKIT_SELECTION_MODE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A field parsed as TOML but its value is unusable.
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue {
        /// Dotted key of the field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/gridkit/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Path of the persisted table record.
    #[serde(default)]
    pub state_file_path: Option<PathBuf>,

    /// Restore the persisted table record on startup.
    #[serde(default)]
    pub restore_state: Option<bool>,

    /// `[table]` section.
    #[serde(default)]
    pub table: Option<TableSection>,

    /// `[theme]` section.
    #[serde(default)]
    pub theme: Option<ThemeSection>,
}

/// Table settings section from TOML.
///
/// ```toml
/// [table]
/// outlined = true
/// corner_radius = 1
/// row_dividers = true
/// resize_mode = "constrained"
/// selection_mode = "multiple"
/// default_selected = [0, 2]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TableSection {
    /// Draw a border around the table.
    #[serde(default)]
    pub outlined: Option<bool>,
    /// Border width; 2 or more draws a thick border.
    #[serde(default)]
    pub border_width: Option<f32>,
    /// Border color in ratatui color syntax (`"red"`, `"#336699"`, `"42"`).
    #[serde(default)]
    pub border_color: Option<String>,
    /// Corner radius; above zero draws rounded corners.
    #[serde(default)]
    pub corner_radius: Option<f32>,
    /// Line between body rows.
    #[serde(default)]
    pub row_dividers: Option<bool>,
    /// Line between columns.
    #[serde(default)]
    pub column_dividers: Option<bool>,
    /// Divider thickness; above one draws heavy lines.
    #[serde(default)]
    pub divider_thickness: Option<f32>,
    /// Header activation sorts.
    #[serde(default)]
    pub sorting: Option<bool>,
    /// Resize handles are live.
    #[serde(default)]
    pub resizing: Option<bool>,
    /// Row activation selects.
    #[serde(default)]
    pub selection: Option<bool>,
    /// Pointer movement highlights rows.
    #[serde(default)]
    pub hover: Option<bool>,
    /// `"unconstrained"` or `"constrained"`.
    #[serde(default)]
    pub resize_mode: Option<LayoutMode>,
    /// `"single"` or `"multiple"`.
    #[serde(default)]
    pub selection_mode: Option<SelectionMode>,
    /// Rows selected at mount.
    #[serde(default)]
    pub default_selected: Option<Vec<usize>>,
}

/// Theme section from TOML. Colors use ratatui color syntax.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    /// Alternate row backgrounds.
    #[serde(default)]
    pub striped: Option<bool>,
    /// Header text color.
    #[serde(default)]
    pub header_fg: Option<String>,
    /// Background of odd rows when striped.
    #[serde(default)]
    pub stripe_bg: Option<String>,
    /// Background of the hovered row.
    #[serde(default)]
    pub hover_bg: Option<String>,
    /// Background of selected rows.
    #[serde(default)]
    pub selection_bg: Option<String>,
}

/// Resolved theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Alternate row backgrounds.
    pub striped: bool,
    /// Header text color.
    pub header_fg: Color,
    /// Background of odd rows when striped.
    pub stripe_bg: Color,
    /// Background of the hovered row.
    pub hover_bg: Color,
    /// Background of selected rows.
    pub selection_bg: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            striped: true,
            header_fg: Color::Cyan,
            stripe_bg: Color::Rgb(0x1e, 0x22, 0x2a),
            hover_bg: Color::Rgb(0x2e, 0x34, 0x40),
            selection_bg: Color::Rgb(0x3b, 0x4b, 0x6b),
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Path of the persisted table record.
    pub state_file_path: PathBuf,
    /// Restore the persisted table record on startup.
    pub restore_state: bool,
    /// Initial table settings.
    pub table: TableSettings,
    /// Theme colors.
    pub theme: ThemeColors,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_path(),
            state_file_path: default_state_path(),
            restore_state: true,
            table: TableSettings::default(),
            theme: ThemeColors::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/gridkit/gridkit.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("gridkit").join("gridkit.log"),
        None => PathBuf::from("gridkit.log"),
    }
}

/// Resolve default path of the persisted table record.
///
/// Lives next to the log file: `~/.local/state/gridkit/table.json`.
pub fn default_state_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("gridkit").join("table.json"),
        None => PathBuf::from("gridkit-table.json"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/gridkit/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridkit").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `GRIDKIT_CONFIG` environment variable
/// 3. Default path `~/.config/gridkit/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for color strings that do not parse.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let table = match config.table {
        Some(section) => merge_table(section, defaults.table)?,
        None => defaults.table,
    };
    let theme = match config.theme {
        Some(section) => merge_theme(section, defaults.theme)?,
        None => defaults.theme,
    };

    Ok(ResolvedConfig {
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        state_file_path: config.state_file_path.unwrap_or(defaults.state_file_path),
        restore_state: config.restore_state.unwrap_or(defaults.restore_state),
        table,
        theme,
    })
}

fn merge_table(section: TableSection, defaults: TableSettings) -> Result<TableSettings, ConfigError> {
    let border_color = match section.border_color {
        Some(raw) => Some(parse_color("table.border_color", &raw)?),
        None => defaults.border_color,
    };
    Ok(TableSettings {
        outlined: section.outlined.unwrap_or(defaults.outlined),
        border_width: section.border_width.or(defaults.border_width),
        border_color,
        corner_radius: section.corner_radius.unwrap_or(defaults.corner_radius),
        show_row_dividers: section.row_dividers.unwrap_or(defaults.show_row_dividers),
        show_column_dividers: section
            .column_dividers
            .unwrap_or(defaults.show_column_dividers),
        divider_thickness: section
            .divider_thickness
            .unwrap_or(defaults.divider_thickness),
        features: Features {
            sorting: section.sorting.unwrap_or(defaults.features.sorting),
            resizing: section.resizing.unwrap_or(defaults.features.resizing),
            selection: section.selection.unwrap_or(defaults.features.selection),
            hover: section.hover.unwrap_or(defaults.features.hover),
        },
        resize_mode: section.resize_mode.unwrap_or(defaults.resize_mode),
        default_selected: section
            .default_selected
            .unwrap_or(defaults.default_selected),
        selection_mode: section.selection_mode.unwrap_or(defaults.selection_mode),
    })
}

fn merge_theme(section: ThemeSection, defaults: ThemeColors) -> Result<ThemeColors, ConfigError> {
    let color = |field: &'static str, raw: Option<String>, fallback: Color| match raw {
        Some(raw) => parse_color(field, &raw),
        None => Ok(fallback),
    };
    Ok(ThemeColors {
        striped: section.striped.unwrap_or(defaults.striped),
        header_fg: color("theme.header_fg", section.header_fg, defaults.header_fg)?,
        stripe_bg: color("theme.stripe_bg", section.stripe_bg, defaults.stripe_bg)?,
        hover_bg: color("theme.hover_bg", section.hover_bg, defaults.hover_bg)?,
        selection_bg: color(
            "theme.selection_bg",
            section.selection_bg,
            defaults.selection_bg,
        )?,
    })
}

fn parse_color(field: &'static str, raw: &str) -> Result<Color, ConfigError> {
    Color::from_str(raw).map_err(|_| ConfigError::InvalidValue {
        field,
        value: raw.to_string(),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `GRIDKIT_RESIZE_MODE`: `unconstrained` / `constrained`
/// - `GRIDKIT_SELECTION_MODE`: `single` / `multiple`
///
/// Unparsable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(RESIZE_MODE_ENV_VAR) {
        match raw.parse::<LayoutMode>() {
            Ok(mode) => config.table.resize_mode = mode,
            Err(e) => warn!(error = %e, "Ignoring {}", RESIZE_MODE_ENV_VAR),
        }
    }

    if let Ok(raw) = std::env::var(SELECTION_MODE_ENV_VAR) {
        match raw.parse::<SelectionMode>() {
            Ok(mode) => config.table.selection_mode = mode,
            Err(e) => warn!(error = %e, "Ignoring {}", SELECTION_MODE_ENV_VAR),
        }
    }

    config
}

/// CLI flags that override configuration.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--resize-mode`
    pub resize_mode: Option<LayoutMode>,
    /// `--selection-mode`
    pub selection_mode: Option<SelectionMode>,
    /// `--state-file`
    pub state_file_path: Option<PathBuf>,
    /// `--no-restore`
    pub no_restore: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(mode) = cli.resize_mode {
        config.table.resize_mode = mode;
    }

    if let Some(mode) = cli.selection_mode {
        config.table.selection_mode = mode;
    }

    if let Some(path) = cli.state_file_path {
        config.state_file_path = path;
    }

    if cli.no_restore {
        config.restore_state = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
