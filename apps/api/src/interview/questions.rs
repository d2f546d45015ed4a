//! Question generation — fills the question prompt, calls the model, and turns the
//! completion into a list of questions.

use serde_json::Value;

use crate::interview::models::QuestionRequest;
use crate::interview::prompts::QUESTION_PROMPT;
use crate::interview::InterviewError;
use crate::llm_client::{strip_code_fences, ModelClient};

pub async fn generate_questions(
    request: &QuestionRequest,
    llm: &dyn ModelClient,
) -> Result<Vec<String>, InterviewError> {
    let prompt = QUESTION_PROMPT.format(&request.prompt_values())?;
    let output = llm.invoke(&prompt).await?;
    parse_questions(&output.text)
}

/// Parses model output into questions.
///
/// A JSON array is taken as-is. Text that is not JSON at all falls back to one
/// question per non-blank line. Valid JSON that is not an array is an error.
/// The last two cases are deliberately asymmetric.
pub fn parse_questions(raw: &str) -> Result<Vec<String>, InterviewError> {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Array(items)) => Ok(items.into_iter().map(question_text).collect()),
        Ok(_) => Err(InterviewError::NotAList),
        Err(_) => Ok(cleaned
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()),
    }
}

/// Non-string array elements are kept as their JSON text.
fn question_text(item: Value) -> String {
    match item {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
