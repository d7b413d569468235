use std::path::PathBuf;
use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Hand landmark model not found at {0}")]
    ModelNotFound(PathBuf),
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("Malformed landmark sequence: expected {expected} points, got {actual}")]
    MalformedLandmarks { expected: usize, actual: usize },
    #[error("Unknown handedness label: {0}")]
    UnknownHandedness(String),
    #[error("Frame source failed: {0}")]
    FrameSource(String),
    #[error("Hand detector failed: {0}")]
    Detector(String),
    #[error("Actuator failed: {0}")]
    Actuator(String),
    #[error("Coordinator Error: {0}")]
    Coordinator(String),
    #[error("Failed to parse recording line {line}: {source}")]
    Recording {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Errors that only invalidate the current frame; the loop skips to the next one.
    pub fn is_frame_local(&self) -> bool {
        matches!(
            self,
            AppError::MalformedLandmarks { .. }
                | AppError::UnknownHandedness(_)
                | AppError::Detector(_)
        )
    }
}
