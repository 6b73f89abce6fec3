use crate::domain::errors::AppError;
use crate::domain::trends::{SeriesId, TimeGrain, TrendPoint};

/// Interface to the dashboard's data source (the host application's API
/// client). Implementations are out of scope for this crate.
pub trait TrendRepository {
    /// Fetch the full point collection for one series.
    fn load_series(&self, id: &SeriesId, grain: TimeGrain) -> Result<Vec<TrendPoint>, AppError>;
}
