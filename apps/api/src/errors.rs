use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Endpoint-boundary error type.
/// Each variant carries the stage that failed; `Display` renders the exact
/// `detail` string returned to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error in chat: {0}")]
    Chat(String),

    #[error("Error generating questions: {0}")]
    GenerateQuestions(String),

    #[error("Error evaluating answer: {0}")]
    EvaluateAnswer(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = self.to_string();

        let status = match &self {
            AppError::InvalidBody(_) => {
                tracing::warn!("{detail}");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Chat(_) | AppError::GenerateQuestions(_) | AppError::EvaluateAnswer(_) => {
                tracing::error!("{detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
