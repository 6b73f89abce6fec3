use crate::domain::logging::{LogComponent, get_logger};

pub mod domain;
pub mod infrastructure;
pub mod application;

/// Initialize the crate's global services for a host application.
///
/// Installs the stderr logger and the system clock. Without this, logging
/// falls back to a no-op.
pub fn initialize() {
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let time_provider = Box::new(infrastructure::services::SystemTimeProvider::new());
    domain::logging::init_time_provider(time_provider);

    get_logger().info(
        LogComponent::Application("Initialize"),
        "🚀 Dashboard chart core initialized",
    );
}
