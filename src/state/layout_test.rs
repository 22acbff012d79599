use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn new_clamps_configured_max_into_one_through_four() {
    assert_eq!(LayoutState::new(0).effective_items_per_page(), 1);
    assert_eq!(LayoutState::new(4).effective_items_per_page(), 4);
    assert_eq!(LayoutState::new(100).effective_items_per_page(), 4);
}

#[test]
fn starts_unmeasured_on_page_zero() {
    let layout = LayoutState::new(4);
    assert!(!layout.is_measured());
    assert_eq!(layout.current_page(), 0);
}

// =============================================================
// Width-derived tiles per view
// =============================================================

#[test]
fn width_800_fits_four_tiles() {
    // available = 800 - 40 = 760; floor(755 / 180) = 4.
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);
    assert!(layout.is_measured());
    assert_eq!(layout.effective_items_per_page(), 4);
}

#[test]
fn width_400_fits_one_tile() {
    // available = 400 - 40 = 360; floor(355 / 180) = 1.
    let mut layout = LayoutState::new(4);
    layout.observe_width(400.0);
    assert_eq!(layout.effective_items_per_page(), 1);
    assert_eq!(layout.total_pages(10), 10);
}

#[test]
fn effective_never_exceeds_configured_max() {
    let mut layout = LayoutState::new(2);
    layout.observe_width(4000.0);
    assert_eq!(layout.effective_items_per_page(), 2);
}

#[test]
fn effective_stays_in_bounds_for_any_width() {
    for max in 1..=4 {
        let mut layout = LayoutState::new(max);
        for width in [-50.0, 0.0, 1.0, 179.0, 180.0, 365.0, 545.0, 725.0, 10_000.0, f64::NAN] {
            layout.observe_width(width);
            let effective = layout.effective_items_per_page();
            assert!(
                (1..=max).contains(&effective),
                "width {width}: effective {effective} out of [1, {max}]"
            );
        }
    }
}

#[test]
fn tiny_or_invalid_widths_still_show_one_tile() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(0.0);
    assert_eq!(layout.effective_items_per_page(), 1);

    layout.observe_width(-10.0);
    assert_eq!(layout.effective_items_per_page(), 1);
}

#[test]
fn repeated_width_events_are_idempotent() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);
    let snapshot = layout.clone();
    layout.observe_width(800.0);
    assert_eq!(layout, snapshot);
}

// =============================================================
// Page reset on effective change
// =============================================================

#[test]
fn shrink_that_changes_effective_resets_page() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);
    layout.next(16);
    layout.next(16);
    assert_eq!(layout.current_page(), 2);

    layout.observe_width(400.0);
    assert_eq!(layout.effective_items_per_page(), 1);
    assert_eq!(layout.current_page(), 0);
}

#[test]
fn width_change_with_same_effective_keeps_page() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);
    layout.next(16);

    layout.observe_width(810.0);
    assert_eq!(layout.effective_items_per_page(), 4);
    assert_eq!(layout.current_page(), 1);
}

// =============================================================
// Pagination arithmetic
// =============================================================

#[test]
fn total_pages_is_ceiling_of_count_over_effective() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);
    assert_eq!(layout.total_pages(0), 0);
    assert_eq!(layout.total_pages(1), 1);
    assert_eq!(layout.total_pages(4), 1);
    assert_eq!(layout.total_pages(5), 2);
    assert_eq!(layout.total_pages(9), 3);
}

#[test]
fn navigation_is_a_no_op_at_both_boundaries() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);

    layout.previous();
    assert_eq!(layout.current_page(), 0);

    // 10 items at 4 per page: pages 0..=2.
    layout.next(10);
    layout.next(10);
    assert_eq!(layout.current_page(), 2);
    layout.next(10);
    assert_eq!(layout.current_page(), 2);

    layout.previous();
    assert_eq!(layout.current_page(), 1);
}

#[test]
fn page_stays_in_range_for_any_walk() {
    let mut layout = LayoutState::new(3);
    layout.observe_width(620.0);
    let items = 7;
    for _ in 0..20 {
        layout.next(items);
        assert!(layout.current_page() < layout.total_pages(items));
    }
    for _ in 0..20 {
        layout.previous();
    }
    assert_eq!(layout.current_page(), 0);
}

#[test]
fn next_with_no_items_stays_pinned_at_zero() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);
    layout.next(0);
    assert_eq!(layout.current_page(), 0);
}

// =============================================================
// Visible slice
// =============================================================

#[test]
fn visible_range_is_the_current_window() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);
    assert_eq!(layout.visible_range(10), 0..4);

    layout.next(10);
    assert_eq!(layout.visible_range(10), 4..8);

    layout.next(10);
    assert_eq!(layout.visible_range(10), 8..10);
}

#[test]
fn visible_range_is_empty_for_empty_gallery() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);
    assert_eq!(layout.visible_range(0), 0..0);
}

// =============================================================
// Item-set swaps
// =============================================================

#[test]
fn reconcile_clamps_page_after_items_shrink() {
    let mut layout = LayoutState::new(4);
    layout.observe_width(800.0);
    layout.next(12);
    layout.next(12);
    assert_eq!(layout.current_page(), 2);

    layout.reconcile_item_count(5);
    assert_eq!(layout.current_page(), 1);

    layout.reconcile_item_count(0);
    assert_eq!(layout.current_page(), 0);
}
