// In-process ModelClient used by handler and operation tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, ModelClient, ModelOutput};

pub struct StubModel {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every invocation fails with an `LlmError::Api` carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for StubModel {
    async fn invoke(&self, prompt: &str) -> Result<ModelOutput, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(ModelOutput { text: text.clone() }),
            Err(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}
