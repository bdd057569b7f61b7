//! Property-based tests for saving and restoring table settings.
//!
//! Properties under test:
//! - Any settings survive the record written out as JSON text and read back
//! - Corrupting any one field rejects the whole record, naming that field
//! - A rejected record leaves the table's settings untouched

use gridkit::model::{Column, LayoutMode, RestoreError, SelectionMode};
use gridkit::table_state::{Features, TableSettings, TableViewModel, RECORD_ARITY};
use proptest::prelude::*;
use ratatui::style::Color;
use serde_json::{json, Value};

// ===== Strategies =====

fn arb_color() -> impl Strategy<Value = Option<Color>> {
    prop_oneof![
        Just(None),
        Just(Some(Color::Red)),
        Just(Some(Color::DarkGray)),
        (0u8..=255).prop_map(|i| Some(Color::Indexed(i))),
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Some(Color::Rgb(r, g, b))),
    ]
}

/// Small non-negative quarters, exactly representable as f32 and f64.
fn arb_measure() -> impl Strategy<Value = f32> {
    (0u16..64).prop_map(|q| f32::from(q) / 4.0)
}

fn arb_settings() -> impl Strategy<Value = TableSettings> {
    (
        (any::<bool>(), prop::option::of(arb_measure()), arb_color(), arb_measure()),
        (any::<bool>(), any::<bool>(), arb_measure()),
        prop::array::uniform4(any::<bool>()),
        (
            prop_oneof![Just(LayoutMode::Unconstrained), Just(LayoutMode::Constrained)],
            prop::collection::vec(0usize..50, 0..5),
            prop_oneof![Just(SelectionMode::Single), Just(SelectionMode::Multiple)],
        ),
    )
        .prop_map(
            |(
                (outlined, border_width, border_color, corner_radius),
                (show_row_dividers, show_column_dividers, divider_thickness),
                [sorting, resizing, selection, hover],
                (resize_mode, default_selected, selection_mode),
            )| TableSettings {
                outlined,
                border_width,
                border_color,
                corner_radius,
                show_row_dividers,
                show_column_dividers,
                divider_thickness,
                features: Features {
                    sorting,
                    resizing,
                    selection,
                    hover,
                },
                resize_mode,
                default_selected,
                selection_mode,
            },
        )
}

/// A value of the wrong JSON type for field `index`.
fn wrong_type(index: usize) -> Value {
    match index {
        0 | 4 | 5 | 7..=10 => json!("yes"),
        1 | 3 | 6 => json!(true),
        2 | 11 | 13 => json!(7),
        _ => json!("0,1"),
    }
}

fn table(settings: TableSettings) -> TableViewModel<u32> {
    let columns = vec![Column::new("n", "N", |n: &u32| n.to_string())];
    TableViewModel::new(columns, vec![1, 2, 3], settings).expect("valid columns")
}

// ===== Properties =====

proptest! {
    #[test]
    fn settings_survive_json_text(settings in arb_settings()) {
        let text = serde_json::to_string(&settings.to_record()).expect("serialize");
        let record: Vec<Value> = serde_json::from_str(&text).expect("parse");
        prop_assert_eq!(record.len(), RECORD_ARITY);
        prop_assert_eq!(TableSettings::from_record(&record), Ok(settings));
    }

    #[test]
    fn one_bad_field_rejects_the_record(
        settings in arb_settings(),
        index in 0usize..RECORD_ARITY,
    ) {
        let mut record = settings.to_record();
        record[index] = wrong_type(index);

        let result = TableSettings::from_record(&record);
        let is_type_error = matches!(
            result,
            Err(RestoreError::FieldType { index: i, .. }) if i == index
        );
        prop_assert!(is_type_error, "field {} gave {:?}", index, result);
    }

    #[test]
    fn rejected_record_keeps_current_settings(
        current in arb_settings(),
        saved in arb_settings(),
        index in 0usize..RECORD_ARITY,
    ) {
        let mut table = table(current.clone());
        let mut record = saved.to_record();
        record[index] = wrong_type(index);

        prop_assert!(table.restore_record(&record).is_err());
        prop_assert_eq!(table.settings(), &current);
    }

    #[test]
    fn wrong_arity_is_rejected(len in 0usize..30) {
        prop_assume!(len != RECORD_ARITY);
        let record = vec![json!(true); len];
        prop_assert_eq!(
            TableSettings::from_record(&record),
            Err(RestoreError::Arity { expected: RECORD_ARITY, actual: len })
        );
    }
}

// ===== Scenarios =====

#[test]
fn restored_modes_reach_the_table() {
    let mut table = table(TableSettings::default());
    table.row_click(0);

    let saved = TableSettings {
        resize_mode: LayoutMode::Constrained,
        selection_mode: SelectionMode::Multiple,
        ..TableSettings::default()
    };
    table.restore_record(&saved.to_record()).expect("valid record");

    assert_eq!(table.layout_mode(), LayoutMode::Constrained);
    assert_eq!(table.selection_mode(), SelectionMode::Multiple);
    assert_eq!(table.selection().selected_items(), &[1]);
}

#[test]
fn unknown_mode_name_is_a_value_error() {
    let mut record = TableSettings::default().to_record();
    record[11] = json!("STRETCH");
    assert_eq!(
        TableSettings::from_record(&record),
        Err(RestoreError::FieldValue {
            index: 11,
            field: "resize_mode",
            value: "STRETCH".to_string(),
        })
    );
}

#[test]
fn mode_names_are_case_insensitive() {
    let mut record = TableSettings::default().to_record();
    record[13] = json!("multiple");
    let settings = TableSettings::from_record(&record).expect("valid record");
    assert_eq!(settings.selection_mode, SelectionMode::Multiple);
}

#[test]
fn negative_default_selection_is_rejected() {
    let mut record = TableSettings::default().to_record();
    record[12] = json!([0, -1]);
    assert!(matches!(
        TableSettings::from_record(&record),
        Err(RestoreError::FieldType { index: 12, .. })
    ));
}

#[test]
fn unparseable_border_color_is_a_value_error() {
    let mut record = TableSettings::default().to_record();
    record[2] = json!("not-a-color");
    assert!(matches!(
        TableSettings::from_record(&record),
        Err(RestoreError::FieldValue { index: 2, .. })
    ));
}
