//! Error types for codeviz

use thiserror::Error;

/// Result type alias for codeviz operations
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Visualizer error types
#[derive(Error, Debug)]
pub enum VisualizerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("{0}")]
    Message(String),
}

impl From<arboard::Error> for VisualizerError {
    fn from(err: arboard::Error) -> Self {
        VisualizerError::Clipboard(err.to_string())
    }
}

impl From<toml::de::Error> for VisualizerError {
    fn from(err: toml::de::Error) -> Self {
        VisualizerError::Config(err.to_string())
    }
}
