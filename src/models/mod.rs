mod question;

pub use question::{Question, QuestionDefect, QuizSet, NUM_OPTIONS};

/// Screen the terminal app is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Entering study text.
    Welcome,
    /// Waiting for the backend to return a quiz.
    Generating,
    /// Answering questions.
    Quiz,
    /// Reviewing the score.
    Result,
}
