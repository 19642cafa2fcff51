//! Error types for the scoring system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(#[from] async_openai::error::OpenAIError),

    #[error("Unknown debate format: {0}")]
    UnknownFormat(String),
}
