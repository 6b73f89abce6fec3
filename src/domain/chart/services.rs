use super::entities::Chart;
use super::viewport::ZoomPan;
use crate::domain::trends::TrendPoint;

/// View-model for the zoom button row above a chart.
///
/// A button is enabled iff re-running its operation would change the window;
/// the reset affordance only shows while the window is a strict sub-window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomControls {
    pub zoom_in_enabled: bool,
    pub zoom_out_enabled: bool,
    pub reset_visible: bool,
}

impl ZoomControls {
    pub fn for_zoom(zoom: &ZoomPan) -> Self {
        Self {
            zoom_in_enabled: zoom.can_zoom_in(),
            zoom_out_enabled: zoom.can_zoom_out(),
            reset_visible: zoom.range().is_zoomed,
        }
    }

    pub fn for_chart(chart: &Chart) -> Self {
        Self::for_zoom(chart.zoom())
    }
}

/// Rendering collaborator: draws the visible sub-range of a chart's series.
/// Implementations live in the host application.
pub trait TrendRenderer {
    fn draw(&mut self, chart_id: &str, visible: &[TrendPoint]);
}
