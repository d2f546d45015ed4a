//! Axum route handlers for the interview API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::interview::chat::chat;
use crate::interview::evaluation::evaluate_answer;
use crate::interview::models::{
    ChatRequest, ChatResponse, EvaluationRequest, EvaluationResponse, QuestionRequest,
    QuestionResponse,
};
use crate::interview::questions::generate_questions;
use crate::state::AppState;

/// Characters of the question echoed into the evaluation log line.
const LOGGED_QUESTION_CHARS: usize = 50;

/// POST /chat
///
/// Sends the text to the model as-is and returns the completion.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;

    let response = chat(&request.text, state.llm.as_ref())
        .await
        .map_err(|e| AppError::Chat(e.to_string()))?;

    Ok(Json(ChatResponse { response }))
}

/// POST /generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionResponse>, AppError> {
    let Json(request) = payload?;
    info!(
        topic = %request.topic,
        experience = %request.experience,
        duration = request.duration,
        difficulty = %request.difficulty,
        "Received question generation request"
    );

    let questions = generate_questions(&request, state.llm.as_ref())
        .await
        .map_err(|e| AppError::GenerateQuestions(e.to_string()))?;

    info!(count = questions.len(), "Questions successfully generated");
    Ok(Json(QuestionResponse { questions }))
}

/// POST /evaluate-answer
///
/// Returns the model's feedback verbatim; the empty-answer case is left to the prompt.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let Json(request) = payload?;
    let question_preview: String = request.question.chars().take(LOGGED_QUESTION_CHARS).collect();
    info!("Received evaluation request for question: {question_preview}...");

    let evaluation = evaluate_answer(&request, state.llm.as_ref())
        .await
        .map_err(|e| AppError::EvaluateAnswer(e.to_string()))?;

    info!("Answer successfully evaluated");
    Ok(Json(EvaluationResponse { evaluation }))
}
