use crate::error::{Result, SemvError};
use crate::git::BuildMetadata;
use git2::Repository;
use std::path::Path;

const SHORT_HASH_LEN: usize = 7;

/// Build metadata read from a local repository via git2
pub struct GitMetadata {
    repo: Repository,
}

impl GitMetadata {
    /// Discover the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        Ok(GitMetadata { repo })
    }
}

impl BuildMetadata for GitMetadata {
    fn current_user(&self) -> Result<String> {
        let config = self.repo.config()?;
        if let Ok(name) = config.get_string("user.name") {
            if !name.is_empty() {
                return Ok(name);
            }
        }

        // Fall back to the default signature (covers includeIf and
        // system-level config that a direct key lookup can miss).
        let signature = self
            .repo
            .signature()
            .map_err(|_| SemvError::metadata("git user.name is not configured"))?;

        signature
            .name()
            .map(str::to_string)
            .ok_or_else(|| SemvError::metadata("git user.name is not valid UTF-8"))
    }

    fn latest_commit(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .map_err(|_| SemvError::metadata("repository has no commits"))?;

        let commit = head
            .peel_to_commit()
            .map_err(|_| SemvError::metadata("HEAD does not point to a commit"))?;

        let full = commit.id().to_string();
        Ok(full[..SHORT_HASH_LEN.min(full.len())].to_string())
    }
}

// SAFETY: GitMetadata only performs read operations on the underlying
// repository, which libgit2 supports from multiple threads.
unsafe impl Sync for GitMetadata {}
