use std::io;
use std::path::PathBuf;

/// Errors that can occur during omod-scout operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to launch `{command}`: {source}")]
    ProcessLaunchFailure {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Generator process exited with code {exit_code}")]
    ExternalProcessFailure {
        exit_code: i32,
        /// Tail of the combined process output, oldest first
        last_lines: Vec<String>,
    },

    #[error("Failed to write {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid build descriptor {}: {message}", path.display())]
    DescriptorError { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown entry point: {0}")]
    UnknownEntryPoint(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for omod-scout operations
pub type Result<T> = std::result::Result<T, Error>;
