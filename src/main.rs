//! gridkit demo - Entry Point

use clap::Parser;
use gridkit::config::{self, CliOverrides, KeyBindings};
use gridkit::model::{LayoutMode, SelectionMode};
use gridkit::sample::{self, Standing};
use gridkit::state::AppState;
use gridkit::table_state::{TableSettings, TableViewModel};
use gridkit::view::{ColorConfig, TableTheme};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// gridkit demo - an interactive league table in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridkit")]
#[command(version)]
#[command(about = "Sortable, resizable, selectable data table in the terminal")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Column layout policy (unconstrained or constrained)
    #[arg(long)]
    pub resize_mode: Option<LayoutMode>,

    /// Row selection policy (single or multiple)
    #[arg(long)]
    pub selection_mode: Option<SelectionMode>,

    /// Where the table settings are saved on exit
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Start from configured settings instead of the saved ones
    #[arg(long)]
    pub no_restore: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            resize_mode: self.resize_mode,
            selection_mode: self.selection_mode,
            state_file_path: self.state_file.clone(),
            no_restore: self.no_restore,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = config::resolve(args.config.clone(), args.cli_overrides())?;

    gridkit::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let mut settings = config.table.clone();
    if config.restore_state {
        if let Some(saved) = load_saved_settings(&config.state_file_path) {
            settings = saved;
        }
        // Explicit mode flags win over the saved record
        if let Some(mode) = args.resize_mode {
            settings.resize_mode = mode;
        }
        if let Some(mode) = args.selection_mode {
            settings.selection_mode = mode;
        }
    }
    let mut table = TableViewModel::new(sample::columns(), sample::standings(), settings)?;
    table.set_selection_listener(|items: &[Standing]| {
        let teams: Vec<&str> = items.iter().map(|s| s.team.as_str()).collect();
        debug!(?teams, "Selection changed");
    });

    let theme = TableTheme::new(config.theme, ColorConfig::from_env_and_args(args.no_color));
    let state = gridkit::view::run(
        AppState::new(table, "League table"),
        KeyBindings::default(),
        theme,
    )?;

    let record = state.table().persisted_record();
    match config::save_record(&config.state_file_path, &record) {
        Ok(()) => info!(path = ?config.state_file_path, "Table settings saved"),
        Err(err) => warn!(error = %err, "Failed to save table settings"),
    }
    Ok(())
}

/// Decode the saved settings, if any.
///
/// Decoding happens before the table mounts so the saved default selection
/// applies. Failures are logged and yield `None`, keeping the configured
/// settings.
fn load_saved_settings(path: &Path) -> Option<TableSettings> {
    match config::load_record(path) {
        Ok(Some(record)) => match TableSettings::from_record(&record) {
            Ok(settings) => {
                info!(path = ?path, "Restored table settings");
                Some(settings)
            }
            Err(err) => {
                warn!(error = %err, "Rejected saved table settings");
                None
            }
        },
        Ok(None) => {
            debug!(path = ?path, "No saved table settings");
            None
        }
        Err(err) => {
            warn!(error = %err, "Ignoring unreadable state file");
            None
        }
    }
}
