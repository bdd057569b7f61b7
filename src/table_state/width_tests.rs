//! Tests for the column width model.

use super::*;

fn col(id: &str, width: u16, min: u16, max: u16) -> Column<()> {
    Column::new(id, id, |_: &()| String::new())
        .with_width(width)
        .with_min_width(min)
        .with_max_width(max)
}

fn ids(raw: &[&str]) -> Vec<ColumnId> {
    raw.iter().map(|id| ColumnId::new(*id)).collect()
}

// ===== Seeding =====

#[test]
fn new_seeds_stored_widths_from_declared_widths() {
    let model = ColumnWidthModel::new(
        &[col("a", 10, 5, 20), col("b", 30, 5, 40)],
        LayoutMode::Unconstrained,
    );
    assert_eq!(model.width("a"), Some(10));
    assert_eq!(model.width("b"), Some(30));
    assert_eq!(model.width("c"), None);
}

#[test]
fn reseeding_keeps_existing_stored_widths() {
    let columns = [col("a", 10, 5, 20)];
    let mut model = ColumnWidthModel::new(&columns, LayoutMode::Unconstrained);
    model.set_width("a", 17);
    model.seed(&[col("a", 10, 5, 20), col("b", 8, 5, 20)]);
    assert_eq!(model.width("a"), Some(17));
    assert_eq!(model.width("b"), Some(8));
}

// ===== set_width =====

#[test]
fn set_width_clamps_to_max() {
    let mut model = ColumnWidthModel::new(&[col("w", 120, 50, 300)], LayoutMode::Unconstrained);
    assert_eq!(model.set_width("w", 1000), Some(300));
    assert_eq!(model.width("w"), Some(300));
}

#[test]
fn set_width_clamps_to_min() {
    let mut model = ColumnWidthModel::new(&[col("w", 120, 50, 300)], LayoutMode::Unconstrained);
    assert_eq!(model.set_width("w", 10), Some(50));
    assert_eq!(model.width("w"), Some(50));
}

#[test]
fn set_width_clamps_negative_proposals() {
    let mut model = ColumnWidthModel::new(&[col("w", 12, 4, 30)], LayoutMode::Unconstrained);
    model.set_width("w", -500);
    assert_eq!(model.width("w"), Some(4));
}

#[test]
fn set_width_on_non_resizable_column_is_ignored() {
    let fixed = col("fixed", 12, 4, 30).with_resizable(false);
    let mut model = ColumnWidthModel::new(&[fixed], LayoutMode::Unconstrained);
    assert_eq!(model.set_width("fixed", 20), None);
    assert_eq!(model.width("fixed"), Some(12));
}

#[test]
fn set_width_on_unknown_column_is_ignored() {
    let mut model = ColumnWidthModel::new(&[col("a", 12, 4, 30)], LayoutMode::Unconstrained);
    assert_eq!(model.set_width("missing", 20), None);
}

#[test]
fn resize_by_applies_delta_to_stored_width() {
    let mut model = ColumnWidthModel::new(&[col("a", 12, 4, 30)], LayoutMode::Unconstrained);
    assert_eq!(model.resize_by("a", 3), Some(15));
    assert_eq!(model.resize_by("a", -5), Some(10));
    assert_eq!(model.resize_by("a", -100), Some(4));
}

// ===== resolved_widths: unconstrained =====

#[test]
fn unconstrained_returns_stored_widths_for_visible_columns() {
    let mut model = ColumnWidthModel::new(
        &[col("a", 10, 1, 50), col("b", 20, 1, 50), col("c", 30, 1, 50)],
        LayoutMode::Unconstrained,
    );
    model.set_available_width(200);
    let resolved = model.resolved_widths(&ids(&["a", "c"]));
    assert_eq!(resolved.get("a"), Some(10));
    assert_eq!(resolved.get("b"), None);
    assert_eq!(resolved.get("c"), Some(30));
    assert_eq!(resolved.total(), 40);
}

#[test]
fn unconstrained_keeps_overflowing_widths() {
    let mut model = ColumnWidthModel::new(
        &[col("a", 40, 1, 50), col("b", 40, 1, 50)],
        LayoutMode::Unconstrained,
    );
    model.set_available_width(50);
    assert_eq!(model.resolved_widths(&ids(&["a", "b"])).total(), 80);
}

// ===== resolved_widths: constrained =====

#[test]
fn constrained_spreads_surplus_evenly() {
    let mut model = ColumnWidthModel::new(
        &[col("a", 10, 1, 50), col("b", 20, 1, 50)],
        LayoutMode::Constrained,
    );
    model.set_available_width(50);
    let resolved = model.resolved_widths(&ids(&["a", "b"]));
    assert_eq!(resolved.get("a"), Some(20));
    assert_eq!(resolved.get("b"), Some(30));
    assert_eq!(resolved.total(), 50);
}

#[test]
fn constrained_gives_remainder_to_leading_columns() {
    let mut model = ColumnWidthModel::new(
        &[col("a", 10, 1, 50), col("b", 10, 1, 50), col("c", 10, 1, 50)],
        LayoutMode::Constrained,
    );
    model.set_available_width(35);
    let resolved = model.resolved_widths(&ids(&["a", "b", "c"]));
    assert_eq!(resolved.get("a"), Some(12));
    assert_eq!(resolved.get("b"), Some(12));
    assert_eq!(resolved.get("c"), Some(11));
    assert_eq!(resolved.total(), 35);
}

#[test]
fn constrained_does_not_shrink_over_wide_tables() {
    let mut model = ColumnWidthModel::new(
        &[col("a", 40, 1, 50), col("b", 40, 1, 50)],
        LayoutMode::Constrained,
    );
    model.set_available_width(60);
    let resolved = model.resolved_widths(&ids(&["a", "b"]));
    assert_eq!(resolved.get("a"), Some(40));
    assert_eq!(resolved.get("b"), Some(40));
}

#[test]
fn constrained_distribution_does_not_overwrite_stored_widths() {
    let mut model = ColumnWidthModel::new(&[col("a", 10, 1, 50)], LayoutMode::Constrained);
    model.set_available_width(100);
    assert_eq!(model.resolved_widths(&ids(&["a"])).get("a"), Some(100));
    assert_eq!(model.width("a"), Some(10));
}

#[test]
fn constrained_ignores_invisible_columns_when_distributing() {
    let mut model = ColumnWidthModel::new(
        &[col("a", 10, 1, 50), col("hidden", 30, 1, 50)],
        LayoutMode::Constrained,
    );
    model.set_available_width(40);
    let resolved = model.resolved_widths(&ids(&["a"]));
    assert_eq!(resolved.get("a"), Some(40));
    assert_eq!(resolved.len(), 1);
}

#[test]
fn constrained_with_no_visible_columns_is_empty() {
    let mut model = ColumnWidthModel::new(&[col("a", 10, 1, 50)], LayoutMode::Constrained);
    model.set_available_width(40);
    assert!(model.resolved_widths(&[]).is_empty());
}

// ===== Memoization =====

#[test]
fn resolved_widths_is_memoized_until_an_input_changes() {
    let mut model = ColumnWidthModel::new(
        &[col("a", 10, 1, 50), col("b", 10, 1, 50)],
        LayoutMode::Constrained,
    );
    let visible = ids(&["a", "b"]);
    model.set_available_width(40);

    model.resolved_widths(&visible);
    model.resolved_widths(&visible);
    assert_eq!(model.recompute_count(), 1);

    model.set_available_width(40);
    model.resolved_widths(&visible);
    assert_eq!(model.recompute_count(), 1, "Same width must not recompute");

    model.set_available_width(60);
    model.resolved_widths(&visible);
    assert_eq!(model.recompute_count(), 2);

    model.set_width("a", 12);
    model.resolved_widths(&visible);
    assert_eq!(model.recompute_count(), 3);

    model.set_layout_mode(LayoutMode::Unconstrained);
    model.resolved_widths(&visible);
    assert_eq!(model.recompute_count(), 4);

    model.resolved_widths(&ids(&["a"]));
    assert_eq!(model.recompute_count(), 5);
}

#[test]
fn clamped_no_op_resize_does_not_invalidate() {
    let mut model = ColumnWidthModel::new(&[col("a", 50, 1, 50)], LayoutMode::Unconstrained);
    let visible = ids(&["a"]);
    model.resolved_widths(&visible);
    model.set_width("a", 80);
    model.resolved_widths(&visible);
    assert_eq!(model.recompute_count(), 1);
}
