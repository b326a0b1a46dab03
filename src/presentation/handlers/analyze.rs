use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::FileLoader;
use crate::infrastructure::observability::preview_for_log;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";
const TYPE_FIELD: &str = "type";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Failure details stay in the logs; callers only see a generic 500.
fn internal_error() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<F>(
    State(state): State<AppState<F>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    F: FileLoader + 'static + ?Sized,
{
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected non-multipart request");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let mut upload: Option<(String, Bytes)> = None;
    let mut analysis_type: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        };

        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            FILE_FIELD => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                match field.bytes().await {
                    Ok(data) => upload = Some((filename, data)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read file bytes");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file: {}", e),
                        );
                    }
                }
            }
            TYPE_FIELD => analysis_type = field.text().await.ok(),
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    let Some((filename, data)) = upload else {
        tracing::warn!("Analyze request without a file field");
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Missing required form field: file",
        );
    };

    if let Some(analysis_type) = &analysis_type {
        tracing::debug!(analysis_type = %analysis_type, "Form field `type` is accepted but unused");
    }

    tracing::info!(filename = %filename, bytes = data.len(), "Analyzing upload");

    let text = match state.text_extractor.extract_text(&filename, &data).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Text extraction failed");
            return internal_error();
        }
    };

    tracing::debug!(preview = %preview_for_log(&text), "Extracted document text");

    match state.analyzer.analyze(&text).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Document analysis failed");
            internal_error()
        }
    }
}
