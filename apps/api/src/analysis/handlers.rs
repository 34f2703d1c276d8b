//! Axum route handlers for the upload form and the JSON analysis API.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use askama::Template;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::Uri,
    response::Html,
    Json,
};
use chrono::Local;
use tracing::{info, warn};

use crate::analysis::pages::{ErrorPage, IndexPage, ResultPage};
use crate::analysis::{analyze_upload, AnalysisReport, ResumeUpload};
use crate::errors::{AnalysisError, AppError};
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexPage {
        max_upload_mb: format_megabytes(state.config.max_upload_bytes),
    };
    Ok(Html(page.render().context("rendering index page")?))
}

/// POST /analyze
///
/// Form flow: every per-request failure is rendered as the error page.
pub async fn handle_analyze_form(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, AppError> {
    match analyze_request(&state, multipart).await {
        Ok(report) => {
            let html = ResultPage::new(&report)
                .render()
                .context("rendering result page")?;
            Ok(Html(html))
        }
        Err(e) => {
            let html = ErrorPage {
                error_message: e.user_message(),
            }
            .render()
            .context("rendering error page")?;
            Ok(Html(html))
        }
    }
}

/// POST /api/v1/analyze
///
/// Same pipeline as the form, reported as JSON with differentiated status codes.
pub async fn handle_analyze_api(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    Ok(Json(analyze_request(&state, multipart).await?))
}

/// Fallback for unknown routes.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

async fn analyze_request(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AnalysisReport, AnalysisError> {
    let outcome = match read_resume_upload(multipart).await {
        Ok(upload) => run_pipeline(state, upload).await,
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(report) => info!(
            skills_found = report.total_skills_found,
            jobs_matched = report.total_jobs_matched,
            "Resume analyzed"
        ),
        Err(e) => warn!("Resume analysis failed: {e}"),
    }
    outcome
}

/// Pulls the first file out of the `resume` field. Other fields are ignored, and a
/// `resume` part without a filename is a plain form value, not an upload.
async fn read_resume_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Option<ResumeUpload>, AnalysisError> {
    let Ok(mut multipart) = multipart else {
        return Ok(None);
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| anyhow::Error::new(e).context("failed to read multipart upload"))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| anyhow::Error::new(e).context("failed to read uploaded file"))?;

        info!(filename = %filename, size = bytes.len(), "Received resume upload");
        return Ok(Some(ResumeUpload { filename, bytes }));
    }

    Ok(None)
}

async fn run_pipeline(
    state: &AppState,
    upload: Option<ResumeUpload>,
) -> Result<AnalysisReport, AnalysisError> {
    let dataset = Arc::clone(&state.dataset);
    run_blocking(move || analyze_upload(&dataset, upload, Local::now())).await
}

/// Document parsing is CPU-bound; run it on the blocking pool. A panic inside a
/// parser surfaces as a join error and becomes `AnalysisError::Unexpected`.
async fn run_blocking<F>(job: F) -> Result<AnalysisReport, AnalysisError>
where
    F: FnOnce() -> Result<AnalysisReport, AnalysisError> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| anyhow!("document processing aborted: {e}"))?
}

fn format_megabytes(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes % MIB == 0 {
        (bytes / MIB).to_string()
    } else {
        format!("{:.1}", bytes as f64 / MIB as f64)
    }
}
