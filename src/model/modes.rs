//! Policy enums: selection mode and column layout mode.
//!
//! Both have a stable upper-case name used by the persisted table record and
//! a lower-case serde form used by the config file.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A mode name that matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} name: {name:?}")]
pub struct InvalidModeName {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub name: String,
}

/// How many rows may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one row.
    #[default]
    Single,
    /// Any number of rows.
    Multiple,
}

impl SelectionMode {
    /// Persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Multiple => "MULTIPLE",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Multiple,
            Self::Multiple => Self::Single,
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = InvalidModeName;

    /// Accepts the persisted name in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SINGLE" => Ok(Self::Single),
            "MULTIPLE" => Ok(Self::Multiple),
            _ => Err(InvalidModeName {
                kind: "selection mode",
                name: s.to_string(),
            }),
        }
    }
}

/// Column resize policy.
///
/// `Unconstrained` leaves slack or overflow to the rendering surface;
/// `Constrained` stretches narrow tables to fill the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Widths are used as stored.
    #[default]
    Unconstrained,
    /// Surplus viewport width is spread over visible columns.
    Constrained,
}

impl LayoutMode {
    /// Persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unconstrained => "UNCONSTRAINED",
            Self::Constrained => "CONSTRAINED",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Unconstrained => Self::Constrained,
            Self::Constrained => Self::Unconstrained,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = InvalidModeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UNCONSTRAINED" => Ok(Self::Unconstrained),
            "CONSTRAINED" => Ok(Self::Constrained),
            _ => Err(InvalidModeName {
                kind: "resize mode",
                name: s.to_string(),
            }),
        }
    }
}
