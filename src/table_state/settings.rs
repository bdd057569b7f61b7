//! Table settings and their persisted record.
//!
//! The record is a flat, ordered list of JSON primitives so that a host can
//! stash it in whatever save/restore mechanism it has. Field order:
//!
//! | # | field                | type            |
//! |---|----------------------|-----------------|
//! | 0 | outlined             | bool            |
//! | 1 | border width         | number, -1 = absent |
//! | 2 | border color         | string, "" = absent |
//! | 3 | corner radius        | number          |
//! | 4 | row dividers         | bool            |
//! | 5 | column dividers      | bool            |
//! | 6 | divider thickness    | number          |
//! | 7 | sorting enabled      | bool            |
//! | 8 | resizing enabled     | bool            |
//! | 9 | selection enabled    | bool            |
//! | 10| hover enabled        | bool            |
//! | 11| resize mode          | string          |
//! | 12| default selection    | array of ints   |
//! | 13| selection mode       | string          |

use crate::model::{LayoutMode, RestoreError, SelectionMode};
use ratatui::style::Color;
use serde_json::Value;
use std::str::FromStr;

/// Number of fields in a persisted record.
pub const RECORD_ARITY: usize = 14;

/// Which interactive behaviours a table honours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// Header activation sorts.
    pub sorting: bool,
    /// Resize handles change column widths.
    pub resizing: bool,
    /// Row activation selects.
    pub selection: bool,
    /// Pointer movement highlights rows.
    pub hover: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            sorting: true,
            resizing: true,
            selection: true,
            hover: true,
        }
    }
}

/// Visual and behavioural settings of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSettings {
    /// Draw a border around the table.
    pub outlined: bool,
    /// Border width; `None` uses the default thin border.
    pub border_width: Option<f32>,
    /// Border color; `None` uses the theme's.
    pub border_color: Option<Color>,
    /// Corner radius; anything above zero draws rounded corners.
    pub corner_radius: f32,
    /// Draw a line between body rows.
    pub show_row_dividers: bool,
    /// Draw a line between columns.
    pub show_column_dividers: bool,
    /// Divider thickness; above one draws heavy lines.
    pub divider_thickness: f32,
    /// Enabled interactions.
    pub features: Features,
    /// Column layout policy.
    pub resize_mode: LayoutMode,
    /// Display indices selected when the table mounts.
    pub default_selected: Vec<usize>,
    /// Selection policy.
    pub selection_mode: SelectionMode,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            outlined: true,
            border_width: None,
            border_color: None,
            corner_radius: 0.0,
            show_row_dividers: false,
            show_column_dividers: true,
            divider_thickness: 1.0,
            features: Features::default(),
            resize_mode: LayoutMode::Unconstrained,
            default_selected: Vec::new(),
            selection_mode: SelectionMode::Single,
        }
    }
}

impl TableSettings {
    /// Flatten into the persisted record.
    pub fn to_record(&self) -> Vec<Value> {
        vec![
            Value::Bool(self.outlined),
            number(self.border_width.unwrap_or(-1.0)),
            Value::String(
                self.border_color
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            ),
            number(self.corner_radius),
            Value::Bool(self.show_row_dividers),
            Value::Bool(self.show_column_dividers),
            number(self.divider_thickness),
            Value::Bool(self.features.sorting),
            Value::Bool(self.features.resizing),
            Value::Bool(self.features.selection),
            Value::Bool(self.features.hover),
            Value::String(self.resize_mode.as_str().to_string()),
            Value::Array(
                self.default_selected
                    .iter()
                    .map(|&i| Value::from(i as u64))
                    .collect(),
            ),
            Value::String(self.selection_mode.as_str().to_string()),
        ]
    }

    /// Rebuild settings from a persisted record.
    ///
    /// All-or-nothing: any arity, type or value mismatch yields an error and
    /// no settings.
    pub fn from_record(record: &[Value]) -> Result<Self, RestoreError> {
        if record.len() != RECORD_ARITY {
            return Err(RestoreError::Arity {
                expected: RECORD_ARITY,
                actual: record.len(),
            });
        }
        let fields = Fields(record);

        let border_width = fields.number(1, "border_width")?;
        let border_color = match fields.string(2, "border_color")? {
            "" => None,
            raw => Some(fields.parse::<Color>(2, "border_color", raw)?),
        };

        Ok(Self {
            outlined: fields.bool(0, "outlined")?,
            border_width: (border_width >= 0.0).then_some(border_width),
            border_color,
            corner_radius: fields.number(3, "corner_radius")?,
            show_row_dividers: fields.bool(4, "row_dividers")?,
            show_column_dividers: fields.bool(5, "column_dividers")?,
            divider_thickness: fields.number(6, "divider_thickness")?,
            features: Features {
                sorting: fields.bool(7, "sorting")?,
                resizing: fields.bool(8, "resizing")?,
                selection: fields.bool(9, "selection")?,
                hover: fields.bool(10, "hover")?,
            },
            resize_mode: {
                let raw = fields.string(11, "resize_mode")?;
                fields.parse(11, "resize_mode", raw)?
            },
            default_selected: fields.indices(12, "default_selected")?,
            selection_mode: {
                let raw = fields.string(13, "selection_mode")?;
                fields.parse(13, "selection_mode", raw)?
            },
        })
    }
}

fn number(value: f32) -> Value {
    // Non-finite floats have no JSON form; persist them as absent (-1)
    serde_json::Number::from_f64(f64::from(value))
        .map(Value::Number)
        .unwrap_or_else(|| Value::from(-1))
}

/// Typed accessors over a record of known arity.
struct Fields<'a>(&'a [Value]);

impl<'a> Fields<'a> {
    fn type_error(index: usize, field: &'static str, expected: &'static str) -> RestoreError {
        RestoreError::FieldType {
            index,
            field,
            expected,
        }
    }

    fn bool(&self, index: usize, field: &'static str) -> Result<bool, RestoreError> {
        self.0[index]
            .as_bool()
            .ok_or_else(|| Self::type_error(index, field, "bool"))
    }

    fn number(&self, index: usize, field: &'static str) -> Result<f32, RestoreError> {
        self.0[index]
            .as_f64()
            .map(|n| n as f32)
            .ok_or_else(|| Self::type_error(index, field, "number"))
    }

    fn string(&self, index: usize, field: &'static str) -> Result<&'a str, RestoreError> {
        self.0[index]
            .as_str()
            .ok_or_else(|| Self::type_error(index, field, "string"))
    }

    fn indices(&self, index: usize, field: &'static str) -> Result<Vec<usize>, RestoreError> {
        let values = self.0[index]
            .as_array()
            .ok_or_else(|| Self::type_error(index, field, "array"))?;
        values
            .iter()
            .map(|v| {
                v.as_u64()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| Self::type_error(index, field, "array of non-negative integers"))
            })
            .collect()
    }

    fn parse<P: FromStr>(
        &self,
        index: usize,
        field: &'static str,
        raw: &str,
    ) -> Result<P, RestoreError> {
        raw.parse().map_err(|_| RestoreError::FieldValue {
            index,
            field,
            value: raw.to_string(),
        })
    }
}
