//! Free-form chat: the user's text is the prompt, with no template applied.

use crate::interview::InterviewError;
use crate::llm_client::ModelClient;

pub async fn chat(text: &str, llm: &dyn ModelClient) -> Result<String, InterviewError> {
    let output = llm.invoke(text).await?;
    Ok(output.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubModel;

    #[tokio::test]
    async fn test_chat_sends_text_verbatim() {
        let llm = StubModel::replying("Hi! How can I help?");
        let reply = chat("hello {topic}", &llm).await.unwrap();
        assert_eq!(reply, "Hi! How can I help?");
        assert_eq!(llm.prompts(), vec!["hello {topic}".to_string()]);
    }
}
