use thiserror::Error;

/// Unified error type for git-semv operations
#[derive(Error, Debug)]
pub enum SemvError {
    #[error("Cannot parse tag '{tag}': {reason}")]
    Parse { tag: String, reason: String },

    #[error("No parseable version tags found")]
    EmptyList,

    #[error("Invalid bump kind: '{0}' (expected major, minor or patch)")]
    InvalidBumpKind(String),

    #[error("Build metadata error: {0}")]
    Metadata(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semv
pub type Result<T> = std::result::Result<T, SemvError>;

impl SemvError {
    /// Create a parse error for a tag with context
    pub fn parse(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        SemvError::Parse {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create a build metadata error with context
    pub fn metadata(msg: impl Into<String>) -> Self {
        SemvError::Metadata(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        SemvError::Remote(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemvError::Config(msg.into())
    }
}

impl From<git2::Error> for SemvError {
    fn from(err: git2::Error) -> Self {
        SemvError::Metadata(err.message().to_string())
    }
}

impl From<reqwest::Error> for SemvError {
    fn from(err: reqwest::Error) -> Self {
        SemvError::Remote(err.to_string())
    }
}
