mod app_state;

pub use app_state::{AppState, StartupError, build_analysis_context};
