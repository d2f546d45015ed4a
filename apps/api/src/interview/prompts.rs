// Prompt templates for the interview endpoints.

use crate::llm_client::prompts::PromptTemplate;

/// Question generation. The "5 questions as a JSON array" instruction is advisory;
/// `questions::parse_questions` copes with whatever comes back.
pub const QUESTION_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
Generate 5 interview questions for a {difficulty} level candidate with {experience} experience in {topic}.
The interview should last {duration} minutes.
Include a mix of technical, behavioral, and problem-solving questions.
Return the questions as a JSON array of strings.
"#,
    &["topic", "experience", "duration", "difficulty"],
);

/// Answer evaluation. An empty answer is left to the model to report as "not answered".
pub const EVALUATION_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
You are an interview examiner checking whether the provided answer is correct.
Evaluate this answer for the following interview question:

Question: {question}
Answer: {answer}

If no answer is provided, respond with: not answered.
If an answer is provided, give an overall result stating how correct the answer is,
then provide brief feedback on the answer.
Keep the feedback professional and helpful.
"#,
    &["question", "answer"],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_declares_every_placeholder() {
        for name in QUESTION_PROMPT.input_variables {
            assert!(QUESTION_PROMPT.template.contains(&format!("{{{name}}}")));
        }
    }

    #[test]
    fn test_evaluation_prompt_declares_every_placeholder() {
        for name in EVALUATION_PROMPT.input_variables {
            assert!(EVALUATION_PROMPT.template.contains(&format!("{{{name}}}")));
        }
        assert!(EVALUATION_PROMPT.template.contains("not answered"));
    }
}
