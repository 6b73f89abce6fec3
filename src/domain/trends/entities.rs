pub use super::value_objects::{MetricValue, Period};
use serde::{Deserialize, Serialize};

/// Domain entity - Trend point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: Period,
    pub value: MetricValue,
}

impl TrendPoint {
    pub fn new(period: Period, value: MetricValue) -> Self {
        Self { period, value }
    }
}

/// Domain entity - Trend series
///
/// Points are kept ordered by period; a point for an existing period replaces
/// the old one. Dashboards reload whole series, so there is no size cap.
#[derive(Debug, Clone, Default)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a series from an unordered point collection.
    pub fn from_points(points: Vec<TrendPoint>) -> Self {
        let mut sorted = points;
        sorted.sort_by(|a, b| a.period.cmp(&b.period));

        let mut series = Self::new();
        for point in sorted {
            series.push(point);
        }
        series
    }

    pub fn push(&mut self, point: TrendPoint) {
        if let Some(last) = self.points.last_mut() {
            if last.period == point.period {
                *last = point;
                return;
            }

            // Keep chronological order even for out-of-order arrivals
            if point.period < last.period {
                self.insert_sorted(point);
                return;
            }
        }

        self.points.push(point);
    }

    /// Insert a point while keeping period order
    fn insert_sorted(&mut self, point: TrendPoint) {
        let insert_pos = self
            .points
            .iter()
            .position(|p| p.period >= point.period)
            .unwrap_or(self.points.len());

        if insert_pos < self.points.len() && self.points[insert_pos].period == point.period {
            self.points[insert_pos] = point;
        } else {
            self.points.insert(insert_pos, point);
        }
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&TrendPoint> {
        self.points.get(index)
    }

    pub fn latest(&self) -> Option<&TrendPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest value over the whole series.
    pub fn value_range(&self) -> Option<(MetricValue, MetricValue)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_value = self.points[0].value;
        let mut max_value = self.points[0].value;

        for point in &self.points {
            if point.value.value() < min_value.value() {
                min_value = point.value;
            }
            if point.value.value() > max_value.value() {
                max_value = point.value;
            }
        }

        Some((min_value, max_value))
    }
}
