use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::FileLoader;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub profile: String,
    pub version: &'static str,
}

pub async fn health_handler<F>(State(state): State<AppState<F>>) -> impl IntoResponse
where
    F: FileLoader + 'static + ?Sized,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            profile: state.analyzer.profile().to_string(),
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
