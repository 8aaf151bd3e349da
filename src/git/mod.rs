//! Local git metadata abstraction
//!
//! Build annotations need two pieces of identifying data from the local
//! repository: the configured username and the latest commit's short
//! hash. The [BuildMetadata] trait keeps the domain independent of git2,
//! with a real implementation and a mock for testing:
//!
//! - [repository::GitMetadata]: reads from the repository via the `git2` crate
//! - [mock::MockMetadata]: fixed values for tests

pub mod mock;
pub mod repository;

pub use mock::MockMetadata;
pub use repository::GitMetadata;

use crate::error::Result;

/// Provider of local build-identifying data
///
/// Implementors must be `Send + Sync` so annotation can run from any
/// thread. Failures surface as [crate::error::SemvError::Metadata].
pub trait BuildMetadata: Send + Sync {
    /// The local username, typically from `user.name` git config
    fn current_user(&self) -> Result<String>;

    /// Short hash of the latest commit on HEAD
    fn latest_commit(&self) -> Result<String>;
}
