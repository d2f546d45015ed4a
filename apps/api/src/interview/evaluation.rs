//! Answer evaluation. The model's feedback is returned verbatim.

use crate::interview::models::EvaluationRequest;
use crate::interview::prompts::EVALUATION_PROMPT;
use crate::interview::InterviewError;
use crate::llm_client::ModelClient;

pub async fn evaluate_answer(
    request: &EvaluationRequest,
    llm: &dyn ModelClient,
) -> Result<String, InterviewError> {
    let prompt = EVALUATION_PROMPT.format(&request.prompt_values())?;
    let output = llm.invoke(&prompt).await?;
    Ok(output.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubModel;

    #[tokio::test]
    async fn test_empty_answer_leaves_answer_field_blank() {
        let llm = StubModel::replying("not answered");
        let request = EvaluationRequest {
            question: "What is a list?".into(),
            answer: String::new(),
        };

        let evaluation = evaluate_answer(&request, &llm).await.unwrap();
        assert_eq!(evaluation, "not answered");

        let prompts = llm.prompts();
        let prompt = &prompts[0];
        assert!(prompt.contains("Question: What is a list?\n"));
        assert!(prompt.contains("Answer: \n"));
    }

    #[tokio::test]
    async fn test_model_text_is_returned_unmodified() {
        let reply = "```\nMostly correct.\n```\n\n  Mention mutability.  ";
        let llm = StubModel::replying(reply);
        let request = EvaluationRequest {
            question: "What is a list?".into(),
            answer: "An ordered collection".into(),
        };

        assert_eq!(evaluate_answer(&request, &llm).await.unwrap(), reply);
        assert!(llm.prompts()[0].contains("Answer: An ordered collection"));
    }
}
