//! Error types for the JSONL populator.

use thiserror::Error;

/// Errors that can occur during JSONL population.
#[derive(Error, Debug)]
pub enum JsonlPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] roster_generator::GeneratorError),
}
