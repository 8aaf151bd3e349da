use crate::error::{Result, SemvError};
use crate::remote::TagSource;
use serde::Deserialize;
use std::time::Duration;

const API_ROOT: &str = "https://api.github.com/repos";
const PER_PAGE: u32 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One entry of the GitHub tags listing; only the name is consumed
#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// Tag source backed by the GitHub REST API
///
/// Sends a single request per listing (up to 100 tags, newest first).
/// A token from the `GITHUB_TOKEN` environment variable is attached when
/// present, which raises the rate limit and reaches private repositories.
pub struct GithubTagSource {
    client: reqwest::blocking::Client,
    api_root: String,
}

impl GithubTagSource {
    /// Create a source talking to api.github.com
    pub fn new() -> Result<Self> {
        Self::with_api_root(API_ROOT)
    }

    /// Create a source with a custom API root (used by tests)
    pub fn with_api_root(api_root: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("git-semv/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(GithubTagSource {
            client,
            api_root: api_root.into(),
        })
    }

    fn tags_url(&self, repository: &str) -> String {
        format!(
            "{}/{}/tags?per_page={}",
            self.api_root, repository, PER_PAGE
        )
    }
}

impl TagSource for GithubTagSource {
    fn list_tags(&self, repository: &str) -> Result<Vec<String>> {
        if repository.is_empty() {
            return Err(SemvError::remote(
                "no repository specified (expected owner/name)",
            ));
        }

        let mut request = self
            .client
            .get(self.tags_url(repository))
            .header("Accept", "application/vnd.github+json");

        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                request = request.bearer_auth(token);
            }
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(SemvError::remote(format!(
                "GitHub API returned {} for '{}'",
                response.status(),
                repository
            )));
        }

        let entries: Vec<TagEntry> = response.json()?;
        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_url() {
        let source = GithubTagSource::new().unwrap();
        assert_eq!(
            source.tags_url("acme/widget"),
            "https://api.github.com/repos/acme/widget/tags?per_page=100"
        );
    }

    #[test]
    fn test_tags_url_custom_api_root() {
        let source = GithubTagSource::with_api_root("http://localhost:8080/repos").unwrap();
        assert_eq!(
            source.tags_url("acme/widget"),
            "http://localhost:8080/repos/acme/widget/tags?per_page=100"
        );
    }

    #[test]
    fn test_empty_repository_rejected() {
        let source = GithubTagSource::new().unwrap();
        assert!(matches!(
            source.list_tags(""),
            Err(SemvError::Remote(_))
        ));
    }

    #[test]
    fn test_tag_entry_deserialization() {
        let body = r#"[
            {"name": "v1.1.0", "commit": {"sha": "abc", "url": "https://example.invalid"}},
            {"name": "v1.0.0", "commit": {"sha": "def", "url": "https://example.invalid"}}
        ]"#;

        let entries: Vec<TagEntry> = serde_json::from_str(body).unwrap();
        let names: Vec<String> = entries.into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["v1.1.0", "v1.0.0"]);
    }
}
