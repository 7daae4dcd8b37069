//! Study text to quiz pipeline.
//!
//! [`build_prompt`] renders the instruction, a [`CompletionBackend`] fetches
//! the model's raw text, and [`parse_quiz`] turns it into a [`QuizSet`].
//! [`QuizGenerator`] strings the three together.

mod client;
mod prompt;
mod validate;

use std::sync::Arc;

use tracing::{error, info};

use crate::config::GeminiConfig;
use crate::error::{GenerationError, GenerationResult};
use crate::models::QuizSet;
use crate::protocol::GenerateResponse;

pub use client::{CompletionBackend, GeminiClient, GenerateContentRequest, GenerateContentResponse};
pub use prompt::{QUESTION_COUNT, build_prompt};
pub use validate::{SchemaRules, parse_quiz, parse_quiz_with};

/// Generates quizzes from study text using a completion backend.
#[derive(Clone)]
pub struct QuizGenerator {
    backend: Arc<dyn CompletionBackend>,
    rules: SchemaRules,
}

impl QuizGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            rules: SchemaRules::strict(),
        }
    }

    /// Generator talking to Gemini with the given settings.
    pub fn gemini(config: GeminiConfig) -> Self {
        Self::new(Arc::new(GeminiClient::new(config)))
    }

    pub fn with_rules(mut self, rules: SchemaRules) -> Self {
        self.rules = rules;
        self
    }

    /// Run the pipeline once, keeping the failure kind.
    pub async fn try_generate(&self, text: &str) -> GenerationResult<QuizSet> {
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyInput);
        }

        let prompt = build_prompt(text);
        let raw = self.backend.complete(&prompt).await?;
        let quiz = parse_quiz_with(&raw, self.rules)?;

        info!(questions = quiz.len(), "generated quiz");
        Ok(quiz)
    }

    /// Run the pipeline once and fold any failure into the response shape.
    pub async fn generate_quiz(&self, text: &str) -> GenerateResponse {
        match self.try_generate(text).await {
            Ok(quiz) => GenerateResponse::success(&quiz),
            Err(e) => {
                error!(error = %e, "quiz generation failed");
                GenerateResponse::failure(&e)
            }
        }
    }
}

impl std::fmt::Debug for QuizGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizGenerator")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
