use crate::domain::{
    chart::{Chart, ChartKind, TrendRenderer, ViewportRange, ZoomControls, ZoomGesture},
    errors::AppError,
    logging::{LogComponent, get_logger},
    trends::{SeriesId, TimeGrain, TrendRepository},
};
use std::collections::HashMap;

/// Binding of one chart to the series it displays.
struct ChartSlot {
    chart: Chart,
    series_id: SeriesId,
    grain: TimeGrain,
}

/// Application service coordinating the dashboard's charts.
///
/// Charts are fully isolated from each other: one series and one zoom
/// controller each, no shared state.
#[derive(Default)]
pub struct DashboardService {
    charts: HashMap<String, ChartSlot>,
}

impl DashboardService {
    pub fn new() -> Self {
        Self { charts: HashMap::new() }
    }

    pub fn add_chart(&mut self, id: &str, kind: ChartKind, series_id: SeriesId, grain: TimeGrain) {
        get_logger().debug(
            LogComponent::Application("Dashboard"),
            &format!("Registering chart '{}' ({}) over {}", id, kind, series_id),
        );

        let slot = ChartSlot { chart: Chart::new(id.to_string(), kind), series_id, grain };
        self.charts.insert(id.to_string(), slot);
    }

    pub fn chart(&self, id: &str) -> Option<&Chart> {
        self.charts.get(id).map(|slot| &slot.chart)
    }

    pub fn chart_mut(&mut self, id: &str) -> Option<&mut Chart> {
        self.charts.get_mut(id).map(|slot| &mut slot.chart)
    }

    fn slot(&self, id: &str) -> Result<&ChartSlot, AppError> {
        self.charts
            .get(id)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown chart '{}'", id)))
    }

    fn slot_mut(&mut self, id: &str) -> Result<&mut ChartSlot, AppError> {
        self.charts
            .get_mut(id)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown chart '{}'", id)))
    }

    /// Pull fresh points for one chart from the data source.
    ///
    /// The chart's zoom window follows the reload: still-valid windows are
    /// preserved, invalidated ones reset to full width.
    pub fn reload(&mut self, id: &str, repository: &dyn TrendRepository) -> Result<usize, AppError> {
        let slot = self.slot_mut(id)?;

        get_logger().info(
            LogComponent::Application("Dashboard"),
            &format!("🔄 Reloading chart '{}' from {} ({})", id, slot.series_id, slot.grain),
        );

        let points = repository.load_series(&slot.series_id, slot.grain)?;
        let count = points.len();
        slot.chart.set_series(points);

        get_logger().info(
            LogComponent::Application("Dashboard"),
            &format!("✅ Chart '{}' loaded with {} points", id, count),
        );

        Ok(count)
    }

    /// Apply one toolbar/brush gesture and return the resulting window.
    pub fn handle_gesture(&mut self, id: &str, gesture: ZoomGesture) -> Result<ViewportRange, AppError> {
        let slot = self.slot_mut(id)?;

        slot.chart.apply(gesture);
        let range = slot.chart.viewport();

        get_logger().debug(
            LogComponent::Application("Dashboard"),
            &format!("Chart '{}' gesture {:?} -> [{}, {}]", id, gesture, range.start, range.end),
        );

        Ok(range)
    }

    /// Button row state for one chart.
    pub fn controls(&self, id: &str) -> Result<ZoomControls, AppError> {
        Ok(ZoomControls::for_chart(&self.slot(id)?.chart))
    }

    /// Hand the chart's visible sub-range to a renderer.
    pub fn render(&self, id: &str, renderer: &mut dyn TrendRenderer) -> Result<(), AppError> {
        let slot = self.slot(id)?;
        renderer.draw(&slot.chart.id, slot.chart.visible());
        Ok(())
    }

    /// Summary counters for the dashboard header.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            chart_count: self.charts.len(),
            total_points: self.charts.values().map(|slot| slot.chart.len()).sum(),
            zoomed_charts: self
                .charts
                .values()
                .filter(|slot| slot.chart.viewport().is_zoomed)
                .count(),
        }
    }
}

/// Dashboard-wide data statistics
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub chart_count: usize,
    pub total_points: usize,
    pub zoomed_charts: usize,
}
