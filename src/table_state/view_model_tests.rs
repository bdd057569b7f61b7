//! Tests for the table view model.

use super::*;
use crate::model::SortOrder;
use crate::table_state::settings::Features;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Standing {
    team: &'static str,
    pts: u32,
}

fn standings() -> Vec<Standing> {
    vec![
        Standing { team: "B", pts: 10 },
        Standing { team: "A", pts: 10 },
        Standing { team: "C", pts: 20 },
    ]
}

fn columns() -> Vec<Column<Standing>> {
    vec![
        Column::new("team", "Team", |s: &Standing| s.team.to_string())
            .with_width(10)
            .with_min_width(4)
            .with_max_width(20),
        Column::new("pts", "Pts", |s: &Standing| s.pts.to_string())
            .with_width(6)
            .with_min_width(3)
            .with_max_width(12),
    ]
}

fn table(settings: TableSettings) -> TableViewModel<Standing> {
    TableViewModel::new(columns(), standings(), settings).unwrap()
}

fn display_teams(vm: &TableViewModel<Standing>) -> Vec<&'static str> {
    vm.sorted_rows().iter().map(|s| s.team).collect()
}

// ===== Construction =====

#[test]
fn duplicate_column_ids_are_rejected() {
    let mut cols = columns();
    cols.push(Column::new("pts", "Again", |s: &Standing| s.pts.to_string()));
    let err = TableViewModel::new(cols, standings(), TableSettings::default()).unwrap_err();
    assert_eq!(err, TableError::DuplicateColumnId(ColumnId::new("pts")));
}

#[test]
fn empty_column_id_is_rejected() {
    let cols = vec![Column::new("", "Blank", |s: &Standing| s.team.to_string())];
    let err = TableViewModel::new(cols, standings(), TableSettings::default()).unwrap_err();
    assert_eq!(err, TableError::EmptyColumnId(0));
}

#[test]
fn mount_starts_unsorted_in_insertion_order() {
    let vm = table(TableSettings::default());
    assert_eq!(vm.sort_state(), &SortState::unsorted());
    assert_eq!(display_teams(&vm), vec!["B", "A", "C"]);
}

#[test]
fn default_selection_applies_at_mount() {
    let settings = TableSettings {
        selection_mode: SelectionMode::Multiple,
        default_selected: vec![2, 0, 9],
        ..TableSettings::default()
    };
    let vm = table(settings);
    assert_eq!(
        vm.selection().selected_items(),
        &[Standing { team: "C", pts: 20 }, Standing { team: "B", pts: 10 }]
    );
    assert_eq!(vm.selection().selected_indices(), &[2, 0]);
}

// ===== Sorting =====

#[test]
fn header_click_sorts_stably_both_ways() {
    let mut vm = table(TableSettings::default());
    assert!(vm.header_click("pts"));
    assert_eq!(display_teams(&vm), vec!["B", "A", "C"]);
    assert!(vm.header_click("pts"));
    assert_eq!(display_teams(&vm), vec!["C", "B", "A"]);
    assert!(vm.header_click("pts"));
    assert_eq!(display_teams(&vm), vec!["B", "A", "C"]);
    assert_eq!(vm.sort_state().order(), SortOrder::None);
}

#[test]
fn header_click_is_ignored_when_sorting_disabled() {
    let settings = TableSettings {
        features: Features {
            sorting: false,
            ..Features::default()
        },
        ..TableSettings::default()
    };
    let mut vm = table(settings);
    assert!(!vm.header_click("team"));
    assert_eq!(vm.sort_state(), &SortState::unsorted());
}

#[test]
fn display_order_is_recomputed_only_on_input_change() {
    let mut vm = table(TableSettings::default());
    let initial = vm.order_recompute_count();

    vm.header_click("team");
    assert_eq!(vm.order_recompute_count(), initial + 1);

    vm.set_hovered(Some(1));
    vm.viewport_measured(80);
    vm.row_click(0);
    assert_eq!(vm.order_recompute_count(), initial + 1);

    vm.set_rows(standings());
    assert_eq!(vm.order_recompute_count(), initial + 2);
}

#[test]
fn sort_state_survives_data_updates() {
    let mut vm = table(TableSettings::default());
    vm.header_click("team");
    vm.set_rows(vec![
        Standing { team: "Z", pts: 1 },
        Standing { team: "M", pts: 2 },
    ]);
    assert_eq!(display_teams(&vm), vec!["M", "Z"]);
}

#[test]
fn removing_the_sorted_column_falls_back_to_insertion_order() {
    let mut vm = table(TableSettings::default());
    vm.header_click("team");
    vm.set_columns(vec![columns().remove(1)]).unwrap();
    assert_eq!(vm.sort_state().column_id().as_str(), "team");
    assert_eq!(display_teams(&vm), vec!["B", "A", "C"]);
}

// ===== Widths =====

#[test]
fn resize_delta_moves_stored_width_within_bounds() {
    let mut vm = table(TableSettings::default());
    assert_eq!(vm.resize_delta("team", 3), Some(13));
    assert_eq!(vm.resize_delta("team", 100), Some(20));
    assert_eq!(vm.resize_delta("team", -100), Some(4));
}

#[test]
fn resize_is_ignored_when_resizing_disabled() {
    let settings = TableSettings {
        features: Features {
            resizing: false,
            ..Features::default()
        },
        ..TableSettings::default()
    };
    let mut vm = table(settings);
    assert_eq!(vm.resize_delta("team", 3), None);
    assert_eq!(vm.widths().width("team"), Some(10));
}

#[test]
fn constrained_layout_fills_measured_viewport() {
    let mut vm = table(TableSettings::default());
    vm.set_layout_mode(LayoutMode::Constrained);
    vm.viewport_measured(40);
    let resolved = vm.resolved_widths();
    assert_eq!(resolved.total(), 40);
    assert_eq!(resolved.get("team"), Some(22));
    assert_eq!(resolved.get("pts"), Some(18));
}

#[test]
fn hidden_columns_drop_out_of_resolved_widths() {
    let mut vm = table(TableSettings::default());
    assert!(vm.set_column_visible("pts", false));
    assert!(!vm.set_column_visible("pts", false));
    assert_eq!(vm.visible_ids(), &[ColumnId::new("team")]);
    assert_eq!(vm.resolved_widths().get("pts"), None);
    assert_eq!(vm.widths().width("pts"), Some(6));

    vm.set_column_visible("pts", true);
    assert_eq!(vm.resolved_widths().get("pts"), Some(6));
}

// ===== Selection =====

#[test]
fn row_click_toggles_selection_of_displayed_row() {
    let mut vm = table(TableSettings::default());
    vm.header_click("team");
    assert!(vm.row_click(0));
    assert_eq!(vm.selection().selected_items(), &[Standing { team: "A", pts: 10 }]);
    assert!(vm.row_click(0));
    assert!(vm.selection().is_empty());
}

#[test]
fn single_mode_row_clicks_keep_one_row() {
    let mut vm = table(TableSettings::default());
    vm.row_click(0);
    vm.row_click(1);
    assert_eq!(vm.selection().selected_items(), &[Standing { team: "A", pts: 10 }]);
    assert_eq!(vm.selection().selected_indices(), &[1]);
}

#[test]
fn row_click_out_of_range_is_ignored() {
    let mut vm = table(TableSettings::default());
    assert!(!vm.row_click(3));
    assert!(vm.selection().is_empty());
}

#[test]
fn highlight_follows_items_through_resort() {
    let mut vm = table(TableSettings::default());
    vm.row_click(2); // C
    assert_eq!(vm.selection_highlight_set(), BTreeSet::from([2]));
    vm.header_click("pts");
    vm.header_click("pts"); // descending: C, B, A
    assert_eq!(vm.selection_highlight_set(), BTreeSet::from([0]));
    assert!(vm.selection().is_index_selected(2));
}

#[test]
fn deselect_after_resort_keeps_items_and_indices_paired() {
    let settings = TableSettings {
        selection_mode: SelectionMode::Multiple,
        ..TableSettings::default()
    };
    let mut vm = table(settings);
    vm.row_click(0); // B
    vm.header_click("team"); // A, B, C
    vm.row_click(1); // B again: deselect

    let selection = vm.selection();
    assert!(selection.is_empty());
    assert_eq!(selection.selected_indices().len(), selection.selected_items().len());
    assert!(!selection.is_index_selected(0));

    vm.row_click(0); // A
    let selection = vm.selection();
    assert_eq!(selection.selected_items(), &[Standing { team: "A", pts: 10 }]);
    assert_eq!(selection.selected_indices(), &[0]);
}

#[test]
fn select_all_uses_display_order() {
    let settings = TableSettings {
        selection_mode: SelectionMode::Multiple,
        ..TableSettings::default()
    };
    let mut vm = table(settings);
    vm.header_click("team");
    vm.select_all();
    let teams: Vec<_> = vm.selection().selected_items().iter().map(|s| s.team).collect();
    assert_eq!(teams, vec!["A", "B", "C"]);
    assert_eq!(vm.selection().selected_indices(), &[0, 1, 2]);
}

#[test]
fn selection_listener_sees_every_change() {
    let mut vm = table(TableSettings::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    vm.set_selection_listener(move |items: &[Standing]| sink.borrow_mut().push(items.len()));
    vm.row_click(0);
    vm.row_click(0);
    vm.clear_selection();
    assert_eq!(seen.borrow().as_slice(), &[1, 0, 0]);
}

#[test]
fn switching_to_single_mode_truncates_selection() {
    let settings = TableSettings {
        selection_mode: SelectionMode::Multiple,
        ..TableSettings::default()
    };
    let mut vm = table(settings);
    vm.row_click(0);
    vm.row_click(2);
    vm.set_selection_mode(SelectionMode::Single);
    assert_eq!(vm.selection().selected_items(), &[Standing { team: "C", pts: 20 }]);
    assert_eq!(vm.settings().selection_mode, SelectionMode::Single);
}

// ===== Hover =====

#[test]
fn hover_tracks_valid_indices_only() {
    let mut vm = table(TableSettings::default());
    vm.set_hovered(Some(1));
    assert_eq!(vm.hovered_index(), Some(1));
    vm.set_hovered(Some(7));
    assert_eq!(vm.hovered_index(), None);
}

#[test]
fn hover_disabled_never_reports_an_index() {
    let settings = TableSettings {
        features: Features {
            hover: false,
            ..Features::default()
        },
        ..TableSettings::default()
    };
    let mut vm = table(settings);
    vm.set_hovered(Some(1));
    assert_eq!(vm.hovered_index(), None);
}

#[test]
fn shrinking_data_clears_out_of_range_hover() {
    let mut vm = table(TableSettings::default());
    vm.set_hovered(Some(2));
    vm.set_rows(standings()[..1].to_vec());
    assert_eq!(vm.hovered_index(), None);
}

// ===== Persistence =====

#[test]
fn restore_record_applies_valid_settings() {
    let mut vm = table(TableSettings::default());
    let wanted = TableSettings {
        outlined: false,
        resize_mode: LayoutMode::Constrained,
        selection_mode: SelectionMode::Multiple,
        ..TableSettings::default()
    };
    vm.restore_record(&wanted.to_record()).unwrap();
    assert_eq!(vm.settings(), &wanted);
    assert_eq!(vm.widths().layout_mode(), LayoutMode::Constrained);
    assert_eq!(vm.selection().mode(), SelectionMode::Multiple);
}

#[test]
fn restore_record_rejects_malformed_record_without_partial_apply() {
    let mut vm = table(TableSettings::default());
    let mut record = TableSettings {
        outlined: false,
        ..TableSettings::default()
    }
    .to_record();
    record[10] = Value::from(3);

    assert!(vm.restore_record(&record).is_err());
    assert_eq!(vm.settings(), &TableSettings::default());
    assert_eq!(vm.persisted_record(), TableSettings::default().to_record());
}
