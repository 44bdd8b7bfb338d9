use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Could not parse quiz: {0}")]
    QuizParseError(String),

    #[error("Model backend error: {0}")]
    ModelBackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::QuizParseError(_) => "QUIZ_PARSE_ERROR",
            AppError::ModelBackendError(_) => "MODEL_BACKEND_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether repeating the same interaction may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::QuizParseError(_) | AppError::ModelBackendError(_)
        )
    }

    /// Message suitable for showing to a person in the browser.
    pub fn user_message(&self) -> String {
        match self {
            AppError::QuizParseError(_) => {
                "Could not parse the quiz returned by the model. Please generate it again."
                    .to_string()
            }
            AppError::ModelBackendError(_) => {
                "The quiz service is temporarily unavailable. Please try again in a moment."
                    .to_string()
            }
            AppError::ValidationError(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                "Something went wrong on our side.".to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub retryable: bool,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::QuizParseError(_) => StatusCode::BAD_GATEWAY,
            AppError::ModelBackendError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            retryable: self.is_retryable(),
        })
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ModelBackendError(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<handlebars::TemplateError> for AppError {
    fn from(err: handlebars::TemplateError) -> Self {
        AppError::InternalError(format!("Template error: {}", err))
    }
}
impl From<handlebars::RenderError> for AppError {
    fn from(err: handlebars::RenderError) -> Self {
        AppError::InternalError(format!("Render error: {}", err))
    }
}
impl From<async_graphql::Error> for AppError {
    fn from(err: async_graphql::Error) -> Self {
        AppError::InternalError(err.message)
    }
}
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_err, e| {
            e.set("code", self.error_code());
            e.set("retryable", self.is_retryable());
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;
