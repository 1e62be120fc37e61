use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;
use crate::views::IndexPage;

/// Application-level error type.
///
/// Every variant renders the upload page with an error banner, so a bad
/// request never takes the process down.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("The uploaded file is too large. The maximum size is 16 MB.")]
    PayloadTooLarge,

    /// No text could be recovered from the document. Shown verbatim.
    #[error("{0}")]
    Extraction(String),

    /// Deployment fault such as a missing credential. Shown verbatim.
    #[error("{0}")]
    Configuration(String),

    #[error("LLM error: {0}")]
    Llm(LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::NoText => AppError::Extraction(e.to_string()),
            ExtractError::Malformed(_) => AppError::Internal(anyhow::Error::new(e)),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingApiKey => AppError::Configuration(e.to_string()),
            other => AppError::Llm(other),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::Validation(format!("The upload could not be read: {}", e.body_text()))
        }
    }
}

impl AppError {
    /// Status code and the message shown to the user.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            AppError::Extraction(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::BAD_GATEWAY, unexpected_message(e))
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, unexpected_message(e))
            }
        }
    }
}

fn unexpected_message(e: &dyn std::fmt::Display) -> String {
    format!("An unexpected error occurred: {e}. Please try again.")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, IndexPage::with_error(&message).render_html()).into_response()
    }
}
