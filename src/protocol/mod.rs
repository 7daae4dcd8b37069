mod messages;

pub use messages::{GenerateRequest, GenerateResponse};
