use std::mem;

use crate::models::{AppState, NUM_OPTIONS, Question, QuizSet};
use crate::protocol::GenerateResponse;
use crate::session::{Completed, Idle, InProgress, Session};

/// Study text longer than this is cut off while typing or pasting.
const MAX_INPUT_CHARS: usize = 50_000;

pub struct App {
    session: Session,
    input: String,
    generating: bool,
    error: Option<String>,
    selected_option: usize,
    result_scroll: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            input: String::new(),
            generating: false,
            error: None,
            selected_option: 0,
            result_scroll: 0,
        }
    }

    /// Start with study text already filled in.
    pub fn with_text(text: String) -> Self {
        let mut app = Self::new();
        app.paste(&text);
        app
    }

    /// Skip generation and go straight to answering `quiz`.
    pub fn with_quiz(quiz: QuizSet) -> Self {
        let mut app = Self::new();
        app.session = Idle.start(quiz).into();
        app
    }

    pub fn state(&self) -> AppState {
        if self.generating {
            return AppState::Generating;
        }

        match self.session {
            Session::Idle(_) => AppState::Welcome,
            Session::InProgress(_) => AppState::Quiz,
            Session::Completed(_) => AppState::Result,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn input_push(&mut self, c: char) {
        if self.input_char_count() < MAX_INPUT_CHARS {
            self.input.push(c);
        }
        self.error = None;
    }

    pub fn input_pop(&mut self) {
        self.input.pop();
        self.error = None;
    }

    pub fn paste(&mut self, text: &str) {
        let room = MAX_INPUT_CHARS.saturating_sub(self.input_char_count());
        self.input.extend(text.chars().take(room));
        self.error = None;
    }

    /// Text to send to the backend, or `None` if there is nothing to send or
    /// a request is already pending.
    pub fn begin_generation(&mut self) -> Option<String> {
        if self.generating || !self.session.is_idle() {
            return None;
        }

        if self.input.trim().is_empty() {
            self.error = Some("Paste some study material first".to_string());
            return None;
        }

        self.generating = true;
        self.error = None;
        Some(self.input.clone())
    }

    pub fn finish_generation(&mut self, response: GenerateResponse) {
        self.generating = false;

        match response.into_quiz() {
            Ok(quiz) => {
                self.session = Idle.start(quiz).into();
                self.selected_option = 0;
                self.result_scroll = 0;
            }
            Err(error) => self.error = Some(format!("Error: {}", error)),
        }
    }

    pub fn in_progress(&self) -> Option<&InProgress> {
        match &self.session {
            Session::InProgress(state) => Some(state),
            _ => None,
        }
    }

    pub fn completed(&self) -> Option<&Completed> {
        match &self.session {
            Session::Completed(state) => Some(state),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.in_progress().map(InProgress::current_question)
    }

    pub fn current_question_number(&self) -> usize {
        self.session.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.quiz().map_or(0, |quiz| quiz.len())
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    pub fn select_option(&mut self, index: usize) {
        if index < NUM_OPTIONS {
            self.selected_option = index;
        }
    }

    /// Answer the current question with the highlighted option.
    pub fn submit_answer(&mut self) {
        self.session = match mem::take(&mut self.session) {
            Session::InProgress(state) => {
                let answer = state.current_question().options()[self.selected_option].clone();
                state.submit_answer(answer).into()
            }
            other => other,
        };
        self.selected_option = 0;
    }

    pub fn retake(&mut self) {
        self.session = match mem::take(&mut self.session) {
            Session::Completed(state) => state.retake().into(),
            other => other,
        };
        self.selected_option = 0;
        self.result_scroll = 0;
    }

    /// Drop the quiz and the study text and go back to the input screen.
    pub fn new_quiz(&mut self) {
        self.session = mem::take(&mut self.session).reset();
        self.input.clear();
        self.error = None;
        self.selected_option = 0;
        self.result_scroll = 0;
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(count: usize) -> QuizSet {
        let questions = (0..count)
            .map(|i| {
                let options = ["A", "B", "C", "D"].map(String::from);
                Question::new(format!("Q{}", i + 1), options, "B").unwrap()
            })
            .collect();
        QuizSet::new(questions).unwrap()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut app = App::with_text("   ".to_string());
        assert!(app.begin_generation().is_none());
        assert!(app.error().is_some());
        assert_eq!(app.state(), AppState::Welcome);
    }

    #[test]
    fn test_generation_guard() {
        let mut app = App::with_text("notes".to_string());
        assert_eq!(app.begin_generation().as_deref(), Some("notes"));
        assert_eq!(app.state(), AppState::Generating);
        assert!(app.begin_generation().is_none());

        // Quiz input is ignored while the request is pending.
        app.submit_answer();
        assert_eq!(app.state(), AppState::Generating);

        app.finish_generation(GenerateResponse::success(&quiz(2)));
        assert_eq!(app.state(), AppState::Quiz);
        assert_eq!(app.total_questions(), 2);
    }

    #[test]
    fn test_failed_generation_keeps_text() {
        let mut app = App::with_text("notes".to_string());
        app.begin_generation();
        app.finish_generation(GenerateResponse::Failure {
            error: "HTTP error! status: 500".to_string(),
        });
        assert_eq!(app.state(), AppState::Welcome);
        assert_eq!(app.input(), "notes");
        assert!(app.error().unwrap().contains("500"));
    }

    #[test]
    fn test_answer_flow() {
        let mut app = App::with_quiz(quiz(2));
        app.select_next_option();
        app.submit_answer();
        assert_eq!(app.current_question_number(), 2);
        app.select_previous_option();
        app.submit_answer();

        let done = app.completed().unwrap();
        assert_eq!(done.answers(), &["B".to_string(), "D".to_string()]);
        assert_eq!(done.score(), 1);
        assert_eq!(app.state(), AppState::Result);
    }

    #[test]
    fn test_retake_and_new_quiz() {
        let mut app = App::with_text("notes".to_string());
        app.begin_generation();
        app.finish_generation(GenerateResponse::success(&quiz(1)));
        app.submit_answer();
        assert_eq!(app.state(), AppState::Result);

        app.retake();
        assert_eq!(app.state(), AppState::Quiz);
        assert!(app.session().answers().is_empty());

        app.new_quiz();
        assert_eq!(app.state(), AppState::Welcome);
        assert!(app.input().is_empty());
        assert!(app.session().quiz().is_none());
    }

    #[test]
    fn test_input_editing() {
        let mut app = App::new();
        app.input_push('a');
        app.paste("bc\nd");
        app.input_pop();
        assert_eq!(app.input(), "abc\n");
        assert_eq!(app.input_char_count(), 4);
    }
}
