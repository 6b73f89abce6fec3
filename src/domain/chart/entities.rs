use super::value_objects::{ChartKind, ViewportRange, ZoomGesture};
use super::viewport::ZoomPan;
use crate::domain::trends::{TrendPoint, TrendSeries};

/// Domain entity - Chart
///
/// One dashboard chart: a trend series plus the zoom window over it. The
/// window follows every data reload through [`ZoomPan::set_len`].
#[derive(Debug, Clone)]
pub struct Chart {
    pub id: String,
    pub kind: ChartKind,
    series: TrendSeries,
    zoom: ZoomPan,
}

impl Chart {
    pub fn new(id: String, kind: ChartKind) -> Self {
        Self { id, kind, series: TrendSeries::new(), zoom: ZoomPan::new(0) }
    }

    /// Replace the whole series (reload path).
    pub fn set_series(&mut self, points: Vec<TrendPoint>) {
        self.series = TrendSeries::from_points(points);
        self.zoom.set_len(self.series.len());
    }

    /// Append a single point (live update path). A zoom window that is still
    /// valid for the grown series survives the append.
    pub fn push_point(&mut self, point: TrendPoint) {
        self.series.push(point);
        self.zoom.set_len(self.series.len());
    }

    pub fn series(&self) -> &TrendSeries {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn zoom(&self) -> &ZoomPan {
        &self.zoom
    }

    pub fn viewport(&self) -> ViewportRange {
        self.zoom.range()
    }

    /// The sub-window of points a renderer should draw.
    pub fn visible(&self) -> &[TrendPoint] {
        self.zoom.range().slice(self.series.points())
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset();
    }

    /// Brush-drag selection with raw endpoint indices.
    pub fn brush(&mut self, raw_start: isize, raw_end: isize) {
        self.zoom.set_range(raw_start, raw_end);
    }

    pub fn apply(&mut self, gesture: ZoomGesture) {
        self.zoom.apply(gesture);
    }
}
