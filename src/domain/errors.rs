/// Simplified error system - no over-engineering!
///
/// Viewport arithmetic never fails: malformed gestures are clamped, not rejected.
/// Errors only exist at the data-loading and service-lookup seams.
#[derive(Debug, Clone)]
pub enum AppError {
    DataError(String),
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DataError(msg) => write!(f, "Data Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type alias
pub type DataResult<T> = Result<T, AppError>;
