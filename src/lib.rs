//! # quizify
//!
//! Turn study notes into a ten question multiple-choice quiz with a
//! generative-language backend, then take the quiz in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizify::{GeminiConfig, QuizGenerator};
//!
//! # async fn demo() {
//! let generator = QuizGenerator::gemini(GeminiConfig::from_env());
//! let response = generator.generate_quiz("The mitochondria is ...").await;
//! println!("{}", serde_json::to_string(&response).unwrap());
//! # }
//! ```
//!
//! The [`session`] module holds the quiz state machine and can be driven
//! without any terminal:
//!
//! ```rust
//! use quizify::session::{Idle, Progress};
//! use quizify::{Question, QuizSet};
//!
//! let options = ["Paris", "Rome", "Oslo", "Bern"].map(String::from);
//! let question = Question::new("Capital of France?", options, "Paris").unwrap();
//! let quiz = QuizSet::new(vec![question]).unwrap();
//!
//! match Idle.start(quiz).submit_answer("Paris") {
//!     Progress::Completed(done) => assert_eq!(done.score_percentage(), 100),
//!     Progress::InProgress(_) => unreachable!(),
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod error;
pub mod generation;
mod models;
pub mod protocol;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::debug;

pub use app::App;
pub use config::GeminiConfig;
pub use data::{load_generate_request, load_quiz_from_json, load_study_text};
pub use error::{GenerationError, LoadError};
pub use generation::{CompletionBackend, GeminiClient, QuizGenerator};
pub use models::{AppState, NUM_OPTIONS, Question, QuestionDefect, QuizSet};
pub use protocol::{GenerateRequest, GenerateResponse};

/// Error type for running a quiz in the terminal.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Error loading study text or questions.
    #[error("Failed to load: {0}")]
    Load(#[from] LoadError),

    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz that can be run in the terminal.
pub struct Quiz {
    app: App,
    generator: QuizGenerator,
}

impl Quiz {
    /// Start on the input screen.
    pub fn new(generator: QuizGenerator) -> Self {
        Self {
            app: App::new(),
            generator,
        }
    }

    /// Start on the input screen with `text` already entered.
    pub fn with_text(generator: QuizGenerator, text: String) -> Self {
        Self {
            app: App::with_text(text),
            generator,
        }
    }

    /// Load a saved quiz and start answering it right away. The generator is
    /// used once the user asks for a new quiz.
    ///
    /// ```rust,no_run
    /// use quizify::{GeminiConfig, Quiz, QuizGenerator};
    ///
    /// let generator = QuizGenerator::gemini(GeminiConfig::from_env());
    /// let quiz = Quiz::from_json("quiz.json", generator).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, generator: QuizGenerator) -> Result<Self, QuizError> {
        let questions = load_quiz_from_json(path)?;
        Ok(Self {
            app: App::with_quiz(questions),
            generator,
        })
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &self.generator).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    None,
    Generate(String),
    Quit,
}

async fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
    generator: &QuizGenerator,
) -> Result<(), QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<GenerateResponse>();

    loop {
        while let Ok(response) = rx.try_recv() {
            app.finish_generation(response);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match handle_input(app, key) {
                Action::None => {}
                Action::Quit => break,
                Action::Generate(text) => {
                    debug!(chars = text.chars().count(), "requesting quiz generation");
                    let generator = generator.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let response = generator.generate_quiz(&text).await;
                        let _ = tx.send(response);
                    });
                }
            },
            Event::Paste(text) if app.state() == AppState::Welcome => app.paste(&text),
            _ => {}
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.state() {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Generating => handle_generating_input(key.code),
        AppState::Quiz => handle_quiz_input(app, key.code),
        AppState::Result => handle_result_input(app, key.code),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('g') => app.begin_generation().map_or(Action::None, Action::Generate),
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char(c) => app.input_push(c),
        KeyCode::Enter => app.input_push('\n'),
        KeyCode::Tab => app.input_push('\t'),
        KeyCode::Backspace => app.input_pop(),
        KeyCode::Esc => return Action::Quit,
        _ => {}
    }

    Action::None
}

/// Everything but quitting waits for the pending request.
fn handle_generating_input(key: KeyCode) -> Action {
    match key {
        KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(c @ 'a'..='d') => app.select_option(c as usize - 'a' as usize),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.new_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Action::Quit,
        _ => {}
    }

    Action::None
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.retake(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.new_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Action::Quit,
        _ => {}
    }

    Action::None
}
