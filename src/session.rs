//! Quiz session state machine.
//!
//! Each state is its own type and transitions consume the current value, so
//! answering an idle session or retaking an unfinished one does not compile.
//! [`Session`] wraps the three states for holders that need one value.

use crate::models::{Question, QuizSet};

/// No quiz loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Idle;

/// A quiz is loaded and not every question has been answered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InProgress {
    quiz: QuizSet,
    answers: Vec<String>,
}

/// Every question has been answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    quiz: QuizSet,
    answers: Vec<String>,
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    InProgress(InProgress),
    Completed(Completed),
}

impl Idle {
    pub fn start(self, quiz: QuizSet) -> InProgress {
        InProgress {
            answers: Vec::with_capacity(quiz.len()),
            quiz,
        }
    }
}

impl InProgress {
    /// Record `answer` verbatim for the current question.
    pub fn submit_answer(mut self, answer: impl Into<String>) -> Progress {
        self.answers.push(answer.into());

        if self.answers.len() == self.quiz.len() {
            Progress::Completed(Completed {
                quiz: self.quiz,
                answers: self.answers,
            })
        } else {
            Progress::InProgress(self)
        }
    }

    pub fn reset(self) -> Idle {
        Idle
    }

    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz[self.answers.len()]
    }

    pub fn quiz(&self) -> &QuizSet {
        &self.quiz
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn score(&self) -> usize {
        score(&self.quiz, &self.answers)
    }

    /// Percent of the quiz answered once the current question is submitted.
    pub fn progress_percentage(&self) -> u32 {
        round_percentage(self.current_index() + 1, self.quiz.len())
    }
}

impl Completed {
    /// Start over on the same quiz with an empty answer log.
    pub fn retake(self) -> InProgress {
        Idle.start(self.quiz)
    }

    pub fn reset(self) -> Idle {
        Idle
    }

    /// Stays on the last question, mirroring the final submit.
    pub fn current_index(&self) -> usize {
        self.quiz.len() - 1
    }

    pub fn quiz(&self) -> &QuizSet {
        &self.quiz
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn score(&self) -> usize {
        score(&self.quiz, &self.answers)
    }

    pub fn score_percentage(&self) -> u32 {
        round_percentage(self.score(), self.quiz.len())
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.score_percentage())
    }

    pub fn review(&self) -> Vec<ReviewEntry<'_>> {
        review(&self.quiz, &self.answers)
    }
}

/// A quiz session in any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Idle(Idle),
    InProgress(InProgress),
    Completed(Completed),
}

impl Default for Session {
    fn default() -> Self {
        Self::Idle(Idle)
    }
}

impl From<Idle> for Session {
    fn from(state: Idle) -> Self {
        Self::Idle(state)
    }
}

impl From<InProgress> for Session {
    fn from(state: InProgress) -> Self {
        Self::InProgress(state)
    }
}

impl From<Completed> for Session {
    fn from(state: Completed) -> Self {
        Self::Completed(state)
    }
}

impl From<Progress> for Session {
    fn from(progress: Progress) -> Self {
        match progress {
            Progress::InProgress(state) => Self::InProgress(state),
            Progress::Completed(state) => Self::Completed(state),
        }
    }
}

impl Session {
    /// Drop any quiz and answers. Resetting twice is the same as once.
    pub fn reset(self) -> Self {
        Self::Idle(Idle)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle(_))
    }

    pub fn finished(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn current_index(&self) -> usize {
        match self {
            Self::Idle(_) => 0,
            Self::InProgress(state) => state.current_index(),
            Self::Completed(state) => state.current_index(),
        }
    }

    pub fn quiz(&self) -> Option<&QuizSet> {
        match self {
            Self::Idle(_) => None,
            Self::InProgress(state) => Some(state.quiz()),
            Self::Completed(state) => Some(state.quiz()),
        }
    }

    pub fn answers(&self) -> &[String] {
        match self {
            Self::Idle(_) => &[],
            Self::InProgress(state) => state.answers(),
            Self::Completed(state) => state.answers(),
        }
    }

    pub fn score(&self) -> usize {
        self.quiz().map_or(0, |quiz| score(quiz, self.answers()))
    }

    /// `None` while idle, since there is nothing to divide by.
    pub fn score_percentage(&self) -> Option<u32> {
        score_percentage(self.score(), self.quiz().map_or(0, |quiz| quiz.len()))
    }

    pub fn review(&self) -> Vec<ReviewEntry<'_>> {
        self.quiz()
            .map(|quiz| review(quiz, self.answers()))
            .unwrap_or_default()
    }
}

/// Number of answers that exactly match the correct option.
pub fn score(questions: &[Question], answers: &[String]) -> usize {
    answers
        .iter()
        .zip(questions.iter())
        .filter(|(answer, question)| question.is_correct(answer))
        .count()
}

/// `round(100 * score / total)`, `None` for an empty quiz.
pub fn score_percentage(score: usize, total: usize) -> Option<u32> {
    (total > 0).then(|| round_percentage(score, total))
}

fn round_percentage(part: usize, total: usize) -> u32 {
    // Halves round up, e.g. 1/8 -> 13.
    ((200 * part + total) / (2 * total)) as u32
}

/// One row of the results review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewEntry<'a> {
    pub question: &'a Question,
    pub user_answer: Option<&'a str>,
    pub correct_answer: &'a str,
    pub is_correct: bool,
}

pub fn review<'a>(questions: &'a [Question], answers: &'a [String]) -> Vec<ReviewEntry<'a>> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let user_answer = answers.get(index).map(String::as_str);
            ReviewEntry {
                question,
                user_answer,
                correct_answer: question.answer(),
                is_correct: user_answer.is_some_and(|answer| question.is_correct(answer)),
            }
        })
        .collect()
}

/// Headline shown with the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    KeepStudying,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            _ => Self::KeepStudying,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Work!",
            Self::Good => "Good Job!",
            Self::KeepStudying => "Keep Studying!",
        }
    }
}
