// Interview assistant: question generation, answer evaluation, free-form chat.
// Every model call goes through llm_client; nothing here talks HTTP to the provider.

pub mod chat;
pub mod evaluation;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod questions;

use thiserror::Error;

use crate::llm_client::prompts::TemplateError;
use crate::llm_client::LlmError;

/// Failure inside one of the interview operations.
/// Messages pass through unchanged so the endpoint can prefix them.
#[derive(Debug, Error)]
pub enum InterviewError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Expected a list of questions")]
    NotAList,
}
