mod analyze;
mod health;

pub use analyze::{ErrorResponse, analyze_handler};
pub use health::{HealthResponse, health_handler};
