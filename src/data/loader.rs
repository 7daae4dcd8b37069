use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::LoadError;
use crate::generation::{SchemaRules, parse_quiz_with};
use crate::models::QuizSet;
use crate::protocol::GenerateRequest;

/// Read study text from a file, or from standard input when `path` is `None`.
pub fn load_study_text(path: Option<&Path>) -> Result<String, LoadError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(LoadError::Stdin)?;
            Ok(text)
        }
    }
}

/// Read a `{"text": "..."}` request from a file or standard input.
pub fn load_generate_request(path: Option<&Path>) -> Result<GenerateRequest, LoadError> {
    let body = load_study_text(path)?;
    serde_json::from_str(&body).map_err(LoadError::Request)
}

/// Load a saved `{"questions": [...]}` file through the same validation as
/// a backend reply. Any non-zero number of questions is accepted.
pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<QuizSet, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_quiz_with(&json_content, SchemaRules::any_length()).map_err(|source| LoadError::Quiz {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_quiz_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"questions":[{{"question":"Capital of France?","options":["Paris","Rome","Oslo","Bern"],"answer":"Paris"}}]}}"#
        )
        .unwrap();

        let quiz = load_quiz_from_json(file.path()).unwrap();
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].answer(), "Paris");
    }

    #[test]
    fn test_invalid_quiz_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"questions":[{{"question":"Q"}}]}}"#).unwrap();

        let err = load_quiz_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Quiz { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_study_text(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_generate_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"text":"Photosynthesis happens in chloroplasts."}}"#).unwrap();

        let request = load_generate_request(Some(file.path())).unwrap();
        assert_eq!(request.text, "Photosynthesis happens in chloroplasts.");
    }

    #[test]
    fn test_invalid_generate_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"notes":"missing text field"}}"#).unwrap();

        let err = load_generate_request(Some(file.path())).unwrap_err();
        assert!(matches!(err, LoadError::Request(_)));
        assert!(err.to_string().starts_with("invalid generate request"));
    }

    #[test]
    fn test_load_study_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Mitochondria are the powerhouse of the cell.").unwrap();
        let text = load_study_text(Some(file.path())).unwrap();
        assert!(text.starts_with("Mitochondria"));
    }
}
