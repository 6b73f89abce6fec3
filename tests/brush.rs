use metrics_chart_core::domain::chart::value_objects::ViewportRange;
use metrics_chart_core::domain::chart::viewport::ZoomPan;

#[test]
fn brush_selects_a_window() {
    let mut zoom = ZoomPan::new(12);
    zoom.set_range(2, 8);
    assert_eq!(zoom.range(), ViewportRange { start: 2, end: 8, is_zoomed: true });
}

#[test]
fn brush_over_the_whole_series_is_not_zoomed() {
    let mut zoom = ZoomPan::new(12);
    zoom.set_range(0, 11);
    assert_eq!(zoom.range(), ViewportRange { start: 0, end: 11, is_zoomed: false });
}

#[test]
fn right_to_left_drag_is_swapped() {
    let mut zoom = ZoomPan::new(12);
    zoom.set_range(8, 3);
    assert_eq!(zoom.range(), ViewportRange { start: 3, end: 8, is_zoomed: true });
}

#[test]
fn out_of_bounds_drag_is_clamped() {
    let mut zoom = ZoomPan::new(12);
    zoom.set_range(-1, 15);
    assert_eq!(zoom.range(), ViewportRange { start: 0, end: 11, is_zoomed: false });
}

#[test]
fn degenerate_drag_widens_forward() {
    let mut zoom = ZoomPan::new(12);
    zoom.set_range(5, 5);
    assert_eq!(zoom.range(), ViewportRange { start: 5, end: 6, is_zoomed: true });
}

#[test]
fn degenerate_drag_at_the_last_index_widens_backward() {
    let mut zoom = ZoomPan::new(12);
    zoom.set_range(11, 11);
    assert_eq!(zoom.range(), ViewportRange { start: 10, end: 11, is_zoomed: true });
}

#[test]
fn degenerate_drag_on_a_single_point_stays_put() {
    let mut zoom = ZoomPan::new(1);
    zoom.set_range(5, 5);
    assert_eq!(zoom.range(), ViewportRange { start: 0, end: 0, is_zoomed: false });
}

#[test]
fn brush_is_idempotent() {
    let mut zoom = ZoomPan::new(12);
    zoom.set_range(9, 2);
    let first = zoom.range();
    zoom.set_range(9, 2);
    assert_eq!(zoom.range(), first);
}

#[test]
fn brush_ignores_argument_order() {
    let mut forward = ZoomPan::new(12);
    let mut backward = ZoomPan::new(12);
    forward.set_range(2, 9);
    backward.set_range(9, 2);
    assert_eq!(forward.range(), backward.range());
}

#[test]
fn brush_on_an_empty_series_keeps_the_sentinel() {
    let mut zoom = ZoomPan::new(0);
    zoom.set_range(3, 7);
    assert_eq!(zoom.range(), ViewportRange { start: 0, end: -1, is_zoomed: false });
}
