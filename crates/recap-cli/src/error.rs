//! CLI error types.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read the input document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not a valid summary document.
    #[error("invalid summary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to write the artifact.
    #[error("{0}")]
    Artifact(#[from] recap_core::ArtifactError),
}
