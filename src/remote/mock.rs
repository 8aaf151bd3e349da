use crate::error::{Result, SemvError};
use crate::remote::TagSource;
use std::collections::HashMap;

/// Mock tag source for testing without network access
#[derive(Default)]
pub struct MockTagSource {
    tags: HashMap<String, Vec<String>>,
}

impl MockTagSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockTagSource {
            tags: HashMap::new(),
        }
    }

    /// Add a tag to a repository
    pub fn add_tag(&mut self, repository: impl Into<String>, tag: impl Into<String>) {
        self.tags
            .entry(repository.into())
            .or_default()
            .push(tag.into());
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self, repository: &str) -> Result<Vec<String>> {
        self.tags
            .get(repository)
            .cloned()
            .ok_or_else(|| SemvError::remote(format!("unknown repository: {}", repository)))
    }
}
