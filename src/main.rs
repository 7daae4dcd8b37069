use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand};
use quizify::{GeminiConfig, Quiz, QuizGenerator, load_generate_request, load_study_text};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    backend: BackendArgs,

    /// Write logs to this file (the terminal UI never logs to the screen)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct BackendArgs {
    /// Gemini API key
    #[arg(long, env = "GEMINI_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Gemini endpoint base URL
    #[arg(long, env = "GEMINI_BASE_URL", default_value = quizify::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Model used for generation
    #[arg(long, env = "GEMINI_MODEL", default_value = quizify::config::DEFAULT_MODEL)]
    model: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a quiz and print the JSON response
    Generate {
        /// File with the study text (reads standard input if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Treat the input as a `{"text": "..."}` request body
        #[arg(long)]
        json: bool,
    },
    /// Generate a quiz and take it in the terminal
    Play {
        /// File with the study text to pre-fill
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Take a saved quiz in the terminal
    Replay {
        /// JSON file to load the questions from
        #[arg(short, long)]
        questions: PathBuf,
    },
}

impl BackendArgs {
    fn config(&self) -> GeminiConfig {
        GeminiConfig::default()
            .with_api_key(&self.api_key)
            .with_base_url(&self.base_url)
            .with_model(&self.model)
    }
}

fn init_tracing(log_file: Option<&PathBuf>, to_stderr: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizify=info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if to_stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let to_stderr = matches!(cli.command, Command::Generate { .. });
    init_tracing(cli.log_file.as_ref(), to_stderr)?;

    let generator = QuizGenerator::gemini(cli.backend.config());

    match cli.command {
        Command::Generate { input, json } => {
            let text = if json {
                load_generate_request(input.as_deref())?.text
            } else {
                load_study_text(input.as_deref())?
            };
            let response = generator.generate_quiz(&text).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if !response.is_success() {
                std::process::exit(1);
            }
        }
        Command::Play { input } => {
            let quiz = match input {
                Some(path) => Quiz::with_text(generator, load_study_text(Some(path.as_path()))?),
                None => Quiz::new(generator),
            };
            quiz.run().await?;
        }
        Command::Replay { questions } => {
            Quiz::from_json(questions, generator)?.run().await?;
        }
    }

    Ok(())
}
