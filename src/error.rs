use thiserror::Error;

/// Unified error type for pkg-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version: '{0}' - expected X.Y.Z with single-digit components")]
    InvalidVersionFormat(String),

    /// A preflight check failed; the payload is the check's own message.
    #[error("{0}")]
    Preflight(String),

    #[error("Please check your before_release task: {0}")]
    Hook(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid selection: choice {0} is out of range")]
    InvalidSelection(usize),

    #[error("Invalid release tag: {0}")]
    InvalidReleaseTag(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in pkg-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a preflight error carrying the check's error log
    pub fn preflight(msg: impl Into<String>) -> Self {
        ReleaseError::Preflight(msg.into())
    }

    /// Create a hook error with context
    pub fn hook(msg: impl Into<String>) -> Self {
        ReleaseError::Hook(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Process exit status for this error.
    ///
    /// Every error is a failed precondition or a failed hook, and all of them
    /// terminate the run with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
