use super::value_objects::{ViewportRange, ZoomGesture};

/// Shrink factor of a single zoom-in step.
const ZOOM_IN_FACTOR: f64 = 0.7;
/// Growth factor of a single zoom-out step.
const ZOOM_OUT_FACTOR: f64 = 1.4;
/// Narrowest span (in index steps) the zoom buttons may reach.
const MIN_ZOOM_SPAN: isize = 2;

/// Zoom/pan controller: exactly one valid [`ViewportRange`] over a series of
/// `len` points.
///
/// Every operation is a pure transition `(range, len, input) -> range`.
/// Malformed input is clamped into bounds, never rejected; the only failure
/// mode is a no-op. Each chart owns its own controller, nothing is shared.
#[derive(Debug, Clone)]
pub struct ZoomPan {
    len: usize,
    range: ViewportRange,
}

impl ZoomPan {
    /// Full-width controller over `len` points.
    pub fn new(len: usize) -> Self {
        Self { len, range: ViewportRange::full(len) }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn range(&self) -> ViewportRange {
        self.range
    }

    fn last_index(&self) -> isize {
        self.len as isize - 1
    }

    /// Reconcile the window after the underlying series changed length.
    ///
    /// A window that still addresses the new series survives untouched; an
    /// invalidated one resets to full width.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.range = ViewportRange::empty();
        } else if !self.range.is_valid_for(len) {
            self.range = ViewportRange::full(len);
        }
    }

    /// Narrow the window around its center. No-op at minimum span.
    pub fn zoom_in(&mut self) {
        let span = self.range.span();
        if span <= MIN_ZOOM_SPAN {
            return;
        }

        let new_span = ((span as f64 * ZOOM_IN_FACTOR).floor() as isize).max(MIN_ZOOM_SPAN);
        let center = self.range.start + span / 2;
        let mut new_start = (center - new_span / 2).max(0);
        let new_end = (new_start + new_span - 1).min(self.last_index());

        // Clamped at the right edge: shift left to keep the requested width.
        if new_end == self.last_index() && new_end - new_start < new_span - 1 {
            new_start = (new_end - new_span + 1).max(0);
        }

        self.range = ViewportRange { start: new_start, end: new_end, is_zoomed: true };
    }

    /// Widen the window around its center, capped at full width.
    pub fn zoom_out(&mut self) {
        if self.len <= 1 {
            self.range = ViewportRange::full(self.len);
            return;
        }

        let span = self.range.span();
        let new_span = ((span as f64 * ZOOM_OUT_FACTOR).floor() as isize).clamp(1, self.len as isize);
        let center = self.range.start + span / 2;
        let mut new_start = (center - new_span / 2).max(0);
        let mut new_end = (new_start + new_span - 1).min(self.last_index());

        // Right-edge correction first, then left-edge.
        if new_end == self.last_index() && new_start > 0 {
            new_start = (new_end - new_span + 1).max(0);
        }
        if new_start == 0 && new_end < self.last_index() {
            new_end = (new_start + new_span - 1).min(self.last_index());
        }

        self.range = ViewportRange {
            start: new_start,
            end: new_end,
            is_zoomed: !(new_start == 0 && new_end == self.last_index()),
        };
    }

    /// Back to the full series.
    pub fn reset(&mut self) {
        self.range = ViewportRange::full(self.len);
    }

    /// Brush-drag selection from raw endpoint indices.
    ///
    /// Inputs may be negative, past the data or inverted; they are clamped,
    /// swapped into order and widened to at least two points whenever the
    /// series has more than one.
    pub fn set_range(&mut self, raw_start: isize, raw_end: isize) {
        if self.len == 0 {
            self.range = ViewportRange::empty();
            return;
        }

        let mut start = raw_start.clamp(0, self.last_index());
        let mut end = raw_end.clamp(0, self.last_index());

        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        if start == end && self.len > 1 {
            if end < self.last_index() {
                end += 1;
            } else {
                start -= 1;
            }
        }

        self.range = ViewportRange {
            start,
            end,
            is_zoomed: start != 0 || end != self.last_index(),
        };
    }

    /// Dispatch one toolbar/brush gesture.
    pub fn apply(&mut self, gesture: ZoomGesture) {
        match gesture {
            ZoomGesture::In => self.zoom_in(),
            ZoomGesture::Out => self.zoom_out(),
            ZoomGesture::Reset => self.reset(),
            ZoomGesture::Brush { start, end } => self.set_range(start, end),
        }
    }

    /// Whether a zoom-in step would change the window.
    pub fn can_zoom_in(&self) -> bool {
        let mut probe = self.clone();
        probe.zoom_in();
        probe.range != self.range
    }

    /// Whether a zoom-out step would change the window.
    pub fn can_zoom_out(&self) -> bool {
        let mut probe = self.clone();
        probe.zoom_out();
        probe.range != self.range
    }
}
