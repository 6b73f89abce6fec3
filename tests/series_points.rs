use metrics_chart_core::domain::trends::{MetricValue, Period, TrendPoint, TrendSeries};

fn point(period: u32, value: f64) -> TrendPoint {
    TrendPoint::new(Period::new(period), MetricValue::new(value))
}

#[test]
fn push_appends_in_order() {
    let mut series = TrendSeries::new();
    series.push(point(1, 10.0));
    series.push(point(2, 12.0));
    series.push(point(3, 9.0));

    assert_eq!(series.len(), 3);
    assert_eq!(series.latest().map(|p| p.period), Some(Period::new(3)));
}

#[test]
fn out_of_order_push_is_inserted_sorted() {
    let mut series = TrendSeries::new();
    series.push(point(1, 10.0));
    series.push(point(3, 9.0));
    series.push(point(2, 12.0));

    let periods: Vec<u32> = series.points().iter().map(|p| p.period.value()).collect();
    assert_eq!(periods, vec![1, 2, 3]);
}

#[test]
fn same_period_push_replaces_the_point() {
    let mut series = TrendSeries::new();
    series.push(point(2, 10.0));
    series.push(point(2, 20.0));

    assert_eq!(series.len(), 1);
    assert_eq!(series.latest().map(|p| p.value), Some(MetricValue::new(20.0)));
}

#[test]
fn from_points_sorts_and_deduplicates() {
    let series = TrendSeries::from_points(vec![
        point(3, 1.0),
        point(1, 2.0),
        point(2, 3.0),
        point(1, 4.0),
    ]);

    let periods: Vec<u32> = series.points().iter().map(|p| p.period.value()).collect();
    assert_eq!(periods, vec![1, 2, 3]);
    // The later duplicate wins.
    assert_eq!(series.get(0).map(|p| p.value), Some(MetricValue::new(4.0)));
}

#[test]
fn value_range_spans_the_series() {
    let series = TrendSeries::from_points(vec![point(1, 5.0), point(2, -1.0), point(3, 8.5)]);
    assert_eq!(
        series.value_range(),
        Some((MetricValue::new(-1.0), MetricValue::new(8.5)))
    );
}

#[test]
fn empty_series_has_no_value_range() {
    assert_eq!(TrendSeries::new().value_range(), None);
}
