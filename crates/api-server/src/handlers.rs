//! HTTP request handlers for API endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{error, info};

use crate::types::{
    ErrorResponse, GenerateReportRequest, HealthResponse, MSG_MISSING_INPUT, MSG_NO_VALID_ROWS,
    MSG_RENDER_FAILED, REPORT_FILENAME,
};
use crate::ApiState;
use report_orchestrator::generate_report;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Generate the classroom-grouped marks report.
///
/// The whole pipeline is synchronous and request-scoped; it runs on the
/// blocking pool so layout and serialization stay off the async workers.
pub async fn generate_student_report(
    State(state): State<ApiState>,
    Json(request): Json<GenerateReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let GenerateReportRequest {
        marks_data,
        student_data,
    } = request;
    let (Some(marks), Some(students)) = (marks_data, student_data) else {
        return Err(bad_request(MSG_MISSING_INPUT));
    };
    info!(
        marks = marks.len(),
        students = students.len(),
        "report generation request"
    );

    let font = state.font.clone();
    let pdf = tokio::task::spawn_blocking(move || {
        generate_report(&marks, &students, font.as_ref())
    })
    .await
    .map_err(|e| {
        error!("report task panicked: {e}");
        render_failure(e.to_string())
    })?
    .map_err(|e| {
        if e.is_validation() {
            bad_request(MSG_NO_VALID_ROWS)
        } else {
            error!("report generation failed: {e}");
            render_failure(e.to_string())
        }
    })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={REPORT_FILENAME}"),
            ),
        ],
        pdf,
    ))
}

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
            details: None,
        }),
    )
}

fn render_failure(details: String) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: MSG_RENDER_FAILED.to_string(),
            details: Some(details),
        }),
    )
}
