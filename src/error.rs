//! Error types for quiz generation.

/// Everything that can go wrong between the study text and a usable quiz.
///
/// `Transport` and `Network` are backend problems, `MalformedResponse` and
/// `SchemaViolation` are problems with what the backend said.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The caller passed empty or whitespace-only text.
    #[error("study text is empty")]
    EmptyInput,

    /// The backend answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Transport { status: u16 },

    /// The backend could not be reached at all.
    #[error("network error: {message}")]
    Network { message: String },

    /// The extracted text is not JSON.
    #[error("Invalid AI response format: {message}")]
    MalformedResponse { message: String },

    /// The JSON does not have the quiz shape.
    #[error("invalid quiz at {location}, field `{field}`: {reason}")]
    SchemaViolation {
        location: Location,
        field: &'static str,
        reason: String,
    },
}

impl GenerationError {
    pub(crate) fn schema(location: Location, field: &'static str, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            location,
            field,
            reason: reason.into(),
        }
    }

    /// True for failures of the backend rather than of its content.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Network { .. })
    }
}

/// Where in the decoded payload a schema violation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Root,
    Question(usize),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Root => write!(f, "top level"),
            Location::Question(index) => write!(f, "question {}", index),
        }
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;

/// Errors reading study text or a saved quiz.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("{path} does not contain a valid quiz: {source}")]
    Quiz {
        path: String,
        #[source]
        source: GenerationError,
    },

    #[error("invalid generate request: {0}")]
    Request(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_names_status() {
        let err = GenerationError::Transport { status: 503 };
        assert!(err.to_string().contains("503"));
        assert!(err.is_transport());
    }

    #[test]
    fn test_schema_message_names_index_and_field() {
        let err = GenerationError::schema(Location::Question(3), "answer", "missing");
        let msg = err.to_string();
        assert!(msg.contains("question 3"));
        assert!(msg.contains("`answer`"));
        assert!(!err.is_transport());
    }
}
