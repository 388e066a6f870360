pub mod client;
pub mod error;
pub mod prompt;
pub mod wire;

pub use client::{parse_presentation, GeminiClient};
pub use error::GenerationError;
