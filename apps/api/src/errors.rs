use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format. Please upload a TXT, PDF, or DOCX file.";

/// Everything that can go wrong while analysing one uploaded résumé.
/// None of these are fatal to the process.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no resume file in request")]
    MissingFile,

    #[error("uploaded file has an empty filename")]
    EmptyFilename,

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("cannot decode {format} file: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    #[error("cannot parse {format} file: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("uploaded file has no readable text")]
    EmptyContent,

    #[error("unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl AnalysisError {
    /// The message shown on the error page.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::MissingFile => "Please upload a resume file.".to_string(),
            AnalysisError::EmptyFilename => {
                "No file selected. Please choose a file to upload.".to_string()
            }
            AnalysisError::UnsupportedFormat(_) => {
                format!("Error processing file: {UNSUPPORTED_FORMAT_MESSAGE}")
            }
            AnalysisError::Decode { .. } | AnalysisError::Parse { .. } => {
                format!("Error processing file: {self}")
            }
            AnalysisError::EmptyContent => {
                "The uploaded file appears to be empty or unreadable.".to_string()
            }
            AnalysisError::Unexpected(e) => format!("An unexpected error occurred: {e:#}"),
        }
    }
}

/// Error type of the JSON API.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Analysis(e) => {
                let (status, code) = match e {
                    AnalysisError::MissingFile => (StatusCode::BAD_REQUEST, "MISSING_FILE"),
                    AnalysisError::EmptyFilename => (StatusCode::BAD_REQUEST, "EMPTY_FILENAME"),
                    AnalysisError::UnsupportedFormat(_) => {
                        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_FORMAT")
                    }
                    AnalysisError::Decode { .. } => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "DECODE_ERROR")
                    }
                    AnalysisError::Parse { .. } => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "PARSE_ERROR")
                    }
                    AnalysisError::EmptyContent => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_CONTENT")
                    }
                    AnalysisError::Unexpected(err) => {
                        tracing::error!("Unexpected analysis error: {err:?}");
                        (StatusCode::INTERNAL_SERVER_ERROR, "UNEXPECTED_ERROR")
                    }
                };
                (status, code, e.user_message())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
