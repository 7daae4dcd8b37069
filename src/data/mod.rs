mod loader;

pub use loader::{load_generate_request, load_quiz_from_json, load_study_text};
