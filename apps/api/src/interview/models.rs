use std::collections::HashMap;

use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub topic: String,
    pub experience: String,
    /// Interview length in minutes.
    #[serde(deserialize_with = "deserialize_minutes")]
    pub duration: i64,
    pub difficulty: String,
}

/// Accepts `30`, `30.0` and `"30"`; rejects fractional or non-numeric values.
fn deserialize_minutes<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Minutes {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Minutes::deserialize(deserializer)? {
        Minutes::Int(n) => Ok(n),
        Minutes::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        Minutes::Float(f) => Err(de::Error::custom(format!(
            "duration must be a whole number of minutes, got {f}"
        ))),
        Minutes::Text(s) => s.trim().parse::<i64>().map_err(|_| {
            de::Error::custom(format!("duration must be a whole number of minutes, got \"{s}\""))
        }),
    }
}

impl QuestionRequest {
    pub fn prompt_values(&self) -> HashMap<&'static str, String> {
        HashMap::from([
            ("topic", self.topic.clone()),
            ("experience", self.experience.clone()),
            ("duration", self.duration.to_string()),
            ("difficulty", self.difficulty.clone()),
        ])
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub question: String,
    /// May be empty; the prompt asks the model to report "not answered".
    pub answer: String,
}

impl EvaluationRequest {
    pub fn prompt_values(&self) -> HashMap<&'static str, String> {
        HashMap::from([
            ("question", self.question.clone()),
            ("answer", self.answer.clone()),
        ])
    }
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub evaluation: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_request_requires_integer_duration() {
        let json = r#"{"topic":"Rust","experience":"3 years","duration":"thirty","difficulty":"advanced"}"#;
        assert!(serde_json::from_str::<QuestionRequest>(json).is_err());
    }

    fn duration_of(json: &str) -> Result<i64, serde_json::Error> {
        serde_json::from_str::<QuestionRequest>(json).map(|r| r.duration)
    }

    #[test]
    fn test_question_request_duration_coerces_numeric_forms() {
        let base = r#"{"topic":"Rust","experience":"3 years","difficulty":"advanced","duration":"#;
        assert_eq!(duration_of(&format!("{base}30}}")).unwrap(), 30);
        assert_eq!(duration_of(&format!("{base}30.0}}")).unwrap(), 30);
        assert_eq!(duration_of(&format!("{base}\" 45 \"}}")).unwrap(), 45);
    }

    #[test]
    fn test_question_request_duration_rejects_fractions() {
        let json = r#"{"topic":"Rust","experience":"3 years","duration":30.5,"difficulty":"advanced"}"#;
        let err = duration_of(json).unwrap_err();
        assert!(err.to_string().contains("whole number of minutes"));
        let json = r#"{"topic":"Rust","experience":"3 years","duration":"30.5","difficulty":"advanced"}"#;
        assert!(duration_of(json).is_err());
    }

    #[test]
    fn test_question_request_missing_field_rejected() {
        let json = r#"{"topic":"Rust","experience":"3 years","duration":30}"#;
        let err = serde_json::from_str::<QuestionRequest>(json).unwrap_err();
        assert!(err.to_string().contains("difficulty"));
    }

    #[test]
    fn test_question_prompt_values_stringify_duration() {
        let request = QuestionRequest {
            topic: "Rust".into(),
            experience: "3 years".into(),
            duration: 45,
            difficulty: "advanced".into(),
        };
        let values = request.prompt_values();
        assert_eq!(values.len(), 4);
        assert_eq!(values["duration"], "45");
        assert_eq!(values["topic"], "Rust");
    }

    #[test]
    fn test_evaluation_request_accepts_empty_answer() {
        let json = r#"{"question":"What is a list?","answer":""}"#;
        let request: EvaluationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.prompt_values()["answer"], "");
    }
}
