use metrics_chart_core::domain::chart::value_objects::ViewportRange;
use metrics_chart_core::domain::chart::viewport::ZoomPan;

#[test]
fn fresh_controller_shows_full_series() {
    let zoom = ZoomPan::new(12);
    assert_eq!(zoom.range(), ViewportRange { start: 0, end: 11, is_zoomed: false });
    assert_eq!(zoom.range().point_count(), 12);
    assert!(zoom.range().is_full(12));
}

#[test]
fn empty_series_uses_sentinel() {
    let zoom = ZoomPan::new(0);
    assert_eq!(zoom.range(), ViewportRange { start: 0, end: -1, is_zoomed: false });
    assert_eq!(zoom.range().point_count(), 0);
}

#[test]
fn single_point_series_is_never_zoomed() {
    let zoom = ZoomPan::new(1);
    assert_eq!(zoom.range(), ViewportRange { start: 0, end: 0, is_zoomed: false });
}

#[test]
fn range_validity_tracks_series_length() {
    let range = ViewportRange::full(5);
    assert!(range.is_valid_for(5));
    assert!(range.is_valid_for(6));
    assert!(!range.is_valid_for(3));
    assert!(!range.is_valid_for(0));
}

#[test]
fn sentinel_slices_to_nothing() {
    let items = [1, 2, 3];
    assert!(ViewportRange::empty().slice(&items).is_empty());
}

#[test]
fn slice_is_clamped_to_the_items() {
    let items: Vec<u32> = (0..12).collect();
    let range = ViewportRange { start: 3, end: 6, is_zoomed: true };
    assert_eq!(range.slice(&items), &[3, 4, 5, 6]);

    // A stale window past the data must not panic.
    let stale = ViewportRange { start: 1, end: 20, is_zoomed: true };
    assert_eq!(stale.slice(&items), &(1..12).collect::<Vec<u32>>()[..]);
}
