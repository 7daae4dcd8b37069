//! Caller-facing messages for quiz generation.
//!
//! All messages are serialized as JSON. A response is either
//! `{"success": true, "questions": [...]}` or
//! `{"success": false, "error": "..."}`.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::GenerationError;
use crate::models::{Question, QuizSet};

/// Body of a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

/// Result of one generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateResponse {
    /// The backend produced a valid quiz.
    Success { questions: QuizSet },

    /// Any failure, flattened to its message.
    Failure { error: String },
}

impl GenerateResponse {
    pub fn success(questions: &QuizSet) -> Self {
        Self::Success {
            questions: questions.clone(),
        }
    }

    pub fn failure(err: &GenerationError) -> Self {
        Self::Failure {
            error: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The generated quiz, if any.
    pub fn into_quiz(self) -> Result<QuizSet, String> {
        match self {
            Self::Success { questions } => Ok(questions),
            Self::Failure { error } => Err(error),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Wire<'a> {
    Success {
        success: bool,
        questions: &'a [Question],
    },
    Failure {
        success: bool,
        error: &'a str,
    },
}

impl Serialize for GenerateResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Success { questions } => Wire::Success {
                success: true,
                questions: &questions[..],
            },
            Self::Failure { error } => Wire::Failure {
                success: false,
                error: error.as_str(),
            },
        };
        wire.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serialization() {
        let question = Question::new(
            "Q1",
            ["A".into(), "B".into(), "C".into(), "D".into()],
            "B",
        )
        .unwrap();
        let quiz = QuizSet::new(vec![question]).unwrap();

        let value = serde_json::to_value(GenerateResponse::success(&quiz)).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "questions": [
                    { "question": "Q1", "options": ["A", "B", "C", "D"], "answer": "B" }
                ]
            })
        );
    }

    #[test]
    fn test_failure_serialization() {
        let response = GenerateResponse::failure(&GenerationError::Transport { status: 500 });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], json!(false));
        assert!(value["error"].as_str().unwrap().contains("500"));
        assert!(value.get("questions").is_none());
    }

    #[test]
    fn test_request_deserialization() {
        let request: GenerateRequest = serde_json::from_str(r#"{"text":"notes"}"#).unwrap();
        assert_eq!(request.text, "notes");
    }
}
