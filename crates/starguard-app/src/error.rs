//! Error types for the host application.

use thiserror::Error;

/// Errors raised while reading flags and environment overrides.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A flag that takes a value was the last argument.
    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    /// A flag or environment variable held something unparsable.
    #[error("Invalid value '{value}' for {source_name}")]
    InvalidValue { source_name: String, value: String },

    /// A value parsed but is outside what the loop can run with.
    #[error("{source_name} must be {requirement}, got {value}")]
    OutOfRange {
        source_name: String,
        value: String,
        requirement: &'static str,
    },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// Errors raised by the game loop thread and its shared handle.
#[derive(Debug, Error)]
pub enum LoopError {
    #[error("Simulation already running")]
    AlreadyRunning,

    #[error("Simulation not started")]
    NotRunning,

    /// The loop thread has exited and dropped its receiver.
    #[error("Game loop disconnected")]
    Disconnected,

    #[error("Shared state lock poisoned")]
    Poisoned,

    #[error("Failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Top-level error for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Loop(#[from] LoopError),

    #[error("Failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
