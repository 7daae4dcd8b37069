//! Decoding and validation of the backend's quiz payload.
//!
//! The payload comes from a model we do not control, so it is walked as a
//! `serde_json::Value` and checked field by field instead of being
//! deserialized straight into [`Question`]. Types are never coerced.

use serde_json::{Map, Value};

use crate::error::{GenerationError, GenerationResult, Location};
use crate::models::{NUM_OPTIONS, Question, QuestionDefect, QuizSet};

use super::prompt::QUESTION_COUNT;

/// Constraints applied on top of the per-question shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaRules {
    /// Required number of questions, `None` to accept any non-zero count.
    pub question_count: Option<usize>,
}

impl SchemaRules {
    /// Exactly as many questions as the prompt asks for.
    pub fn strict() -> Self {
        Self {
            question_count: Some(QUESTION_COUNT),
        }
    }

    /// Any number of questions, e.g. for hand-written quiz files.
    pub fn any_length() -> Self {
        Self {
            question_count: None,
        }
    }
}

impl Default for SchemaRules {
    fn default() -> Self {
        Self::strict()
    }
}

/// Parse raw backend text with [`SchemaRules::strict`].
pub fn parse_quiz(raw: &str) -> GenerationResult<QuizSet> {
    parse_quiz_with(raw, SchemaRules::strict())
}

pub fn parse_quiz_with(raw: &str, rules: SchemaRules) -> GenerationResult<QuizSet> {
    let value: Value = serde_json::from_str(raw).map_err(|e| GenerationError::MalformedResponse {
        message: e.to_string(),
    })?;

    let items = value
        .as_object()
        .ok_or_else(|| GenerationError::schema(Location::Root, "questions", "expected a JSON object"))?
        .get("questions")
        .ok_or_else(|| GenerationError::schema(Location::Root, "questions", "missing"))?
        .as_array()
        .ok_or_else(|| GenerationError::schema(Location::Root, "questions", "expected an array"))?;

    if let Some(expected) = rules.question_count {
        if items.len() != expected {
            return Err(GenerationError::schema(
                Location::Root,
                "questions",
                format!("expected {} questions, got {}", expected, items.len()),
            ));
        }
    }

    let questions = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_question(index, item))
        .collect::<GenerationResult<Vec<_>>>()?;

    QuizSet::new(questions)
        .ok_or_else(|| GenerationError::schema(Location::Root, "questions", "no questions"))
}

fn parse_question(index: usize, item: &Value) -> GenerationResult<Question> {
    let at = Location::Question(index);
    let object = item
        .as_object()
        .ok_or_else(|| GenerationError::schema(at, "questions", "expected a JSON object"))?;

    let text = string_field(object, at, "question")?;
    let options = options_field(object, at)?;
    let answer = string_field(object, at, "answer")?;

    Question::new(text, options, answer).map_err(|defect| match defect {
        QuestionDefect::EmptyQuestion => GenerationError::schema(at, "question", "must not be empty"),
        QuestionDefect::DuplicateOption(option) => {
            GenerationError::schema(at, "options", format!("option {} is a duplicate", option))
        }
        QuestionDefect::AnswerNotInOptions => {
            GenerationError::schema(at, "answer", "must equal one of the options")
        }
    })
}

fn string_field<'a>(
    object: &'a Map<String, Value>,
    at: Location,
    field: &'static str,
) -> GenerationResult<&'a str> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(GenerationError::schema(
            at,
            field,
            format!("expected a string, got {}", kind(other)),
        )),
        None => Err(GenerationError::schema(at, field, "missing")),
    }
}

fn options_field(
    object: &Map<String, Value>,
    at: Location,
) -> GenerationResult<[String; NUM_OPTIONS]> {
    let values = match object.get("options") {
        Some(Value::Array(values)) => values,
        Some(other) => {
            return Err(GenerationError::schema(
                at,
                "options",
                format!("expected an array, got {}", kind(other)),
            ));
        }
        None => return Err(GenerationError::schema(at, "options", "missing")),
    };

    let options = values
        .iter()
        .map(|value| match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(GenerationError::schema(
                at,
                "options",
                format!("expected strings, got {}", kind(other)),
            )),
        })
        .collect::<GenerationResult<Vec<_>>>()?;

    let count = options.len();
    <[String; NUM_OPTIONS]>::try_from(options).map_err(|_| {
        GenerationError::schema(
            at,
            "options",
            format!("expected {} options, got {}", NUM_OPTIONS, count),
        )
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(n: usize) -> Value {
        json!({
            "question": format!("Q{}", n),
            "options": ["A", "B", "C", "D"],
            "answer": "B"
        })
    }

    fn payload(count: usize) -> String {
        let questions: Vec<Value> = (1..=count).map(item).collect();
        json!({ "questions": questions }).to_string()
    }

    fn violation(result: GenerationResult<QuizSet>) -> (Location, &'static str) {
        match result {
            Err(GenerationError::SchemaViolation { location, field, .. }) => (location, field),
            other => panic!("expected schema violation, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_ten_questions() {
        let quiz = parse_quiz(&payload(10)).unwrap();
        assert_eq!(quiz.len(), 10);
        assert_eq!(quiz[0].question(), "Q1");
        assert_eq!(quiz[0].answer(), "B");
        assert_eq!(quiz[9].question(), "Q10");
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = parse_quiz("not json").unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse { .. }));
        assert!(err.to_string().starts_with("Invalid AI response format"));
    }

    #[test]
    fn test_empty_text_is_malformed() {
        assert!(matches!(
            parse_quiz(""),
            Err(GenerationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_missing_fields() {
        let raw = r#"{"questions":[{"question":"Q"}]}"#;
        let rules = SchemaRules::any_length();
        assert_eq!(
            violation(parse_quiz_with(raw, rules)),
            (Location::Question(0), "options")
        );

        let raw = r#"{"questions":[{"question":"Q","options":["A","B","C","D"]}]}"#;
        assert_eq!(
            violation(parse_quiz_with(raw, rules)),
            (Location::Question(0), "answer")
        );

        // Strict rules reject the count before looking at the items.
        assert_eq!(
            violation(parse_quiz(r#"{"questions":[{"question":"Q"}]}"#)),
            (Location::Root, "questions")
        );
    }

    #[test]
    fn test_top_level_shape() {
        assert_eq!(violation(parse_quiz("[]")), (Location::Root, "questions"));
        assert_eq!(violation(parse_quiz("{}")), (Location::Root, "questions"));
        assert_eq!(
            violation(parse_quiz(r#"{"questions":{}}"#)),
            (Location::Root, "questions")
        );
        assert_eq!(
            violation(parse_quiz_with(r#"{"questions":[]}"#, SchemaRules::any_length())),
            (Location::Root, "questions")
        );
    }

    #[test]
    fn test_no_coercion() {
        let raw = json!({
            "questions": [{ "question": "Q", "options": ["1", "2", "3", "4"], "answer": 2 }]
        })
        .to_string();
        assert_eq!(
            violation(parse_quiz_with(&raw, SchemaRules::any_length())),
            (Location::Question(0), "answer")
        );

        let raw = json!({
            "questions": [{ "question": "Q", "options": [1, 2, 3, 4], "answer": "2" }]
        })
        .to_string();
        assert_eq!(
            violation(parse_quiz_with(&raw, SchemaRules::any_length())),
            (Location::Question(0), "options")
        );
    }

    #[test]
    fn test_option_rules() {
        let three = json!({
            "questions": [{ "question": "Q", "options": ["A", "B", "C"], "answer": "A" }]
        })
        .to_string();
        assert_eq!(
            violation(parse_quiz_with(&three, SchemaRules::any_length())),
            (Location::Question(0), "options")
        );

        let duplicate = json!({
            "questions": [{ "question": "Q", "options": ["A", "B", "B", "D"], "answer": "A" }]
        })
        .to_string();
        assert_eq!(
            violation(parse_quiz_with(&duplicate, SchemaRules::any_length())),
            (Location::Question(0), "options")
        );

        let letter = json!({
            "questions": [{ "question": "Q", "options": ["Red", "Green", "Blue", "Cyan"], "answer": "B" }]
        })
        .to_string();
        assert_eq!(
            violation(parse_quiz_with(&letter, SchemaRules::any_length())),
            (Location::Question(0), "answer")
        );
    }

    #[test]
    fn test_count_rules() {
        assert_eq!(violation(parse_quiz(&payload(9))), (Location::Root, "questions"));
        assert_eq!(violation(parse_quiz(&payload(11))), (Location::Root, "questions"));
        assert_eq!(
            parse_quiz_with(&payload(3), SchemaRules::any_length())
                .unwrap()
                .len(),
            3
        );
    }

    #[test]
    fn test_non_object_element_names_the_element() {
        let mut questions: Vec<Value> = (1..=10).map(item).collect();
        questions[3] = json!("Q4");
        let raw = json!({ "questions": questions }).to_string();

        let err = parse_quiz(&raw).unwrap_err();
        assert!(err.to_string().contains("question 3, field `questions`"));
        assert_eq!(violation(parse_quiz(&raw)), (Location::Question(3), "questions"));
    }

    #[test]
    fn test_reports_offending_index() {
        let mut questions: Vec<Value> = (1..=10).map(item).collect();
        questions[7]["question"] = json!("");
        let raw = json!({ "questions": questions }).to_string();
        assert_eq!(violation(parse_quiz(&raw)), (Location::Question(7), "question"));
    }
}
