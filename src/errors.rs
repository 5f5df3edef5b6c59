use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Extraction failure: {0}")]
    ExtractionFailure(String),

    #[error("Provider failure: {0}")]
    ProviderFailure(String),

    #[error("Quiz generation failure: only {valid_count} valid questions were produced")]
    QuizGenerationFailure {
        valid_count: usize,
        raw_output: String,
    },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Illegal state transition: cannot {action} while quiz is {state}")]
    IllegalStateTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ExtractionFailure(_) => "EXTRACTION_FAILURE",
            AppError::ProviderFailure(_) => "PROVIDER_FAILURE",
            AppError::QuizGenerationFailure { .. } => "QUIZ_GENERATION_FAILURE",
            AppError::InvalidSelection(_) => "INVALID_SELECTION",
            AppError::IllegalStateTransition { .. } => "ILLEGAL_STATE_TRANSITION",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: &'static str,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ExtractionFailure(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ProviderFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::QuizGenerationFailure { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidSelection(_) => StatusCode::BAD_REQUEST,
            AppError::IllegalStateTransition { .. } => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Low-question-count failures keep the raw generation output so the
        // caller can inspect what the model actually produced.
        let details = match self {
            AppError::QuizGenerationFailure {
                valid_count,
                raw_output,
            } => Some(serde_json::json!({
                "valid_count": valid_count,
                "raw_output": raw_output,
            })),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            error_code: self.error_code(),
            code: self.status_code().as_u16(),
            details,
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ProviderFailure(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ProviderFailure(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
