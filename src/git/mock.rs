use crate::error::{Result, SemvError};
use crate::git::BuildMetadata;

/// Mock metadata provider for testing without a real repository
pub struct MockMetadata {
    user: Option<String>,
    commit: Option<String>,
}

impl MockMetadata {
    /// Create a provider answering with fixed values
    pub fn new(user: impl Into<String>, commit: impl Into<String>) -> Self {
        MockMetadata {
            user: Some(user.into()),
            commit: Some(commit.into()),
        }
    }

    /// Create a provider that fails every lookup
    pub fn empty() -> Self {
        MockMetadata {
            user: None,
            commit: None,
        }
    }
}

impl BuildMetadata for MockMetadata {
    fn current_user(&self) -> Result<String> {
        self.user
            .clone()
            .ok_or_else(|| SemvError::metadata("no user configured"))
    }

    fn latest_commit(&self) -> Result<String> {
        self.commit
            .clone()
            .ok_or_else(|| SemvError::metadata("no commits"))
    }
}
