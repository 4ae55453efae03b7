//! Error types for TextForm
//!
//! The form and search operations are total; these cover the ambient failures
//! around them (config, terminal, GUI start-up, pattern construction).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for TextForm operations
#[derive(Error, Debug)]
pub enum TextFormError {
    #[error("Failed to read config '{0}': {1}")]
    ConfigReadError(PathBuf, std::io::Error),

    #[error("Invalid config '{0}': {1}")]
    ConfigParseError(PathBuf, serde_json::Error),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Failed to build highlight pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("GUI error: {0}")]
    GuiError(String),

    #[error("Logger already installed")]
    LoggerAlreadySet,
}

/// Result type alias for TextForm operations
pub type Result<T> = std::result::Result<T, TextFormError>;

impl TextFormError {
    /// Check if this error still lets the interactive UI start
    /// (the app falls back to defaults and keeps going).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TextFormError::PatternError(_) | TextFormError::LoggerAlreadySet
        )
    }
}
