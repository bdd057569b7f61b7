//! Table styling configuration.
//!
//! Resolves theme colors and the table's border settings into ratatui
//! styles. With colors disabled every highlight falls back to a text
//! modifier so the table stays readable on monochrome terminals.

use crate::config::ThemeColors;
use crate::table_state::TableSettings;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableTheme =====

/// Resolved styles for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTheme {
    colors_enabled: bool,
    striped: bool,
    header: Style,
    stripe: Style,
    hover: Style,
    selection: Style,
    cursor: Style,
    divider: Style,
}

impl TableTheme {
    /// Build styles from theme colors.
    pub fn new(colors: ThemeColors, config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                colors_enabled: true,
                striped: colors.striped,
                header: Style::default()
                    .fg(colors.header_fg)
                    .add_modifier(Modifier::BOLD),
                stripe: Style::default().bg(colors.stripe_bg),
                hover: Style::default().bg(colors.hover_bg),
                selection: Style::default().bg(colors.selection_bg),
                cursor: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                divider: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                colors_enabled: false,
                striped: false,
                header: Style::default().add_modifier(Modifier::BOLD),
                stripe: Style::default(),
                hover: Style::default().add_modifier(Modifier::UNDERLINED),
                selection: Style::default().add_modifier(Modifier::REVERSED),
                cursor: Style::default().add_modifier(Modifier::BOLD),
                divider: Style::default(),
            }
        }
    }

    /// Header cell style; the focused column is underlined.
    pub fn header(&self, focused: bool) -> Style {
        if focused {
            self.header.add_modifier(Modifier::UNDERLINED)
        } else {
            self.header
        }
    }

    /// Divider and separator style.
    pub fn divider(&self) -> Style {
        self.divider
    }

    /// Background style of the body row at `display_index`.
    ///
    /// Layers stripe, hover, selection and cursor in that order.
    pub fn row(&self, display_index: usize, hovered: bool, selected: bool, cursor: bool) -> Style {
        let mut style = Style::default();
        if self.striped && display_index % 2 == 1 {
            style = style.patch(self.stripe);
        }
        if hovered {
            style = style.patch(self.hover);
        }
        if selected {
            style = style.patch(self.selection);
        }
        if cursor {
            style = style.patch(self.cursor);
        }
        style
    }

    /// Outline style from the table's border color.
    pub fn border(&self, settings: &TableSettings) -> Style {
        match settings.border_color {
            Some(color) if self.colors_enabled => Style::default().fg(color),
            _ => Style::default(),
        }
    }
}

/// Outline shape from the table's border settings.
///
/// Widths of two or more draw thick lines; otherwise a positive corner
/// radius rounds the corners.
pub fn border_type(settings: &TableSettings) -> BorderType {
    if settings.border_width.is_some_and(|w| w >= 2.0) {
        BorderType::Thick
    } else if settings.corner_radius > 0.0 {
        BorderType::Rounded
    } else {
        BorderType::Plain
    }
}

// ===== Tests =====
