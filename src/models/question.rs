use std::ops::Deref;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Number of answer options every question carries.
pub const NUM_OPTIONS: usize = 4;

/// A single multiple-choice question.
///
/// `answer` holds the full text of the correct option, never a letter label.
/// Values are only built through [`Question::new`], which enforces that the
/// options are distinct and that the answer is one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    question: String,
    options: [String; NUM_OPTIONS],
    answer: String,
}

/// Reason a question could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionDefect {
    EmptyQuestion,
    DuplicateOption(usize),
    AnswerNotInOptions,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        options: [String; NUM_OPTIONS],
        answer: impl Into<String>,
    ) -> Result<Self, QuestionDefect> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err(QuestionDefect::EmptyQuestion);
        }

        for (index, option) in options.iter().enumerate() {
            if options[..index].contains(option) {
                return Err(QuestionDefect::DuplicateOption(index));
            }
        }

        if !options.contains(&answer) {
            return Err(QuestionDefect::AnswerNotInOptions);
        }

        Ok(Self {
            question,
            options,
            answer,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String; NUM_OPTIONS] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether `given` matches the correct answer exactly.
    pub fn is_correct(&self, given: &str) -> bool {
        self.answer == given
    }
}

/// The ordered, immutable set of questions produced by one generation call.
///
/// Cloning is cheap and clones share the same storage, so a retake can be
/// checked to reuse the very same set with [`QuizSet::ptr_eq`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSet {
    questions: Arc<[Question]>,
}

impl QuizSet {
    /// Returns `None` for an empty list; a quiz always has something to ask.
    pub fn new(questions: Vec<Question>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }

        Some(Self {
            questions: questions.into(),
        })
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.questions, &other.questions)
    }
}

impl Serialize for QuizSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.questions.as_ref().serialize(serializer)
    }
}

impl Deref for QuizSet {
    type Target = [Question];

    fn deref(&self) -> &[Question] {
        &self.questions
    }
}
