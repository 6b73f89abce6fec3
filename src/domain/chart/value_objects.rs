use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartKind {
    #[display(fmt = "Weekly Trends")]
    #[strum(serialize = "weekly-trends")]
    WeeklyTrends,
    #[display(fmt = "Backlog Growth")]
    #[strum(serialize = "backlog-growth")]
    BacklogGrowth,
    #[display(fmt = "Team Workload")]
    #[strum(serialize = "team-workload")]
    TeamWorkload,
    #[display(fmt = "Task Status")]
    #[strum(serialize = "task-status")]
    TaskStatus,
}

/// Value Object - Zoom gesture
///
/// Everything the toolbar buttons and the brush overlay can send at a chart.
/// Brush endpoints arrive raw: possibly inverted, negative or past the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomGesture {
    In,
    Out,
    Reset,
    Brush { start: isize, end: isize },
}

/// Value Object - Viewport range
///
/// Inclusive `[start, end]` index window into a chart's series. An empty series
/// is represented by the `{0, -1}` sentinel. `is_zoomed` is true whenever the
/// window is a strict sub-window of the full series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportRange {
    pub start: isize,
    pub end: isize,
    pub is_zoomed: bool,
}

impl Default for ViewportRange {
    fn default() -> Self {
        Self::empty()
    }
}

impl ViewportRange {
    /// Full-width window over a series of `len` points.
    pub fn full(len: usize) -> Self {
        if len == 0 {
            return Self::empty();
        }
        Self { start: 0, end: len as isize - 1, is_zoomed: false }
    }

    /// The empty-series sentinel.
    pub fn empty() -> Self {
        Self { start: 0, end: -1, is_zoomed: false }
    }

    /// Distance between the endpoints in index steps (`-1` for the sentinel).
    pub fn span(&self) -> isize {
        self.end - self.start
    }

    /// Number of visible points.
    pub fn point_count(&self) -> usize {
        (self.end - self.start + 1).max(0) as usize
    }

    pub fn is_full(&self, len: usize) -> bool {
        len > 0 && self.start == 0 && self.end == len as isize - 1
    }

    /// Whether this window still addresses a series of `len` points.
    pub fn is_valid_for(&self, len: usize) -> bool {
        len > 0
            && self.start >= 0
            && self.start < len as isize
            && self.end >= self.start
            && self.end < len as isize
    }

    /// Slice the visible window out of a full series.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.start < 0 || self.end < self.start {
            return &[];
        }
        let start = self.start as usize;
        let end = (self.end.saturating_add(1) as usize).min(items.len());
        if start >= end {
            return &[];
        }
        &items[start..end]
    }
}
