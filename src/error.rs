//! Error types for the bootstrap.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A --context argument that is not KEY=VALUE.
    #[error("invalid context argument '{0}': expected KEY=VALUE")]
    ContextArg(String),

    /// The context file exists but could not be parsed.
    #[error("context file {path}: {reason}")]
    ContextFile { path: String, reason: String },

    /// Stack registered with an empty logical id.
    #[error("stack logical id must not be empty")]
    EmptyStackId,

    /// Two stacks registered under the same logical id.
    #[error("duplicate stack id '{0}' in construct tree")]
    DuplicateStack(String),

    /// Filesystem failure while synthesizing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
