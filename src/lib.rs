//! lectio - Turn lecture transcripts into study artifacts with LLMs
//!
//! Takes a timestamped transcript and generates short notes, detailed notes,
//! flashcards, a quiz, and a podcast script, one model request per artifact.

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod llm;
pub mod transcript;

use thiserror::Error;

/// Main error type for lectio
#[derive(Error, Debug)]
pub enum LectioError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{provider} API key is missing")]
    MissingCredential { provider: String },

    #[error("Model request failed: {0}")]
    ModelRequest(#[from] reqwest::Error),

    #[error("Model response unusable: {0}")]
    ModelResponse(String),

    #[error("Model returned malformed JSON ({detail}): {snippet}")]
    MalformedOutput { detail: String, snippet: String },

    #[error("Invalid {artifact} data: {reason}")]
    InvalidArtifact {
        artifact: &'static str,
        reason: String,
    },

    #[error("Unknown artifact: {0}")]
    UnknownArtifact(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LectioError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "lectio";
