//! Ordered collection of parsed versions

use crate::domain::version::Version;
use crate::error::{Result, SemvError};
use std::fmt;

/// Versions parsed from a batch of tags, sorted descending
///
/// Unparsable tags are dropped at construction. The ordering is
/// established once and only filtering (which preserves relative order)
/// produces new lists, so rendering always reflects semver precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionList {
    versions: Vec<Version>,
}

impl VersionList {
    /// Build a list from raw tag strings, dropping unparsable entries
    pub fn from_tags<S: AsRef<str>>(tags: &[S], prefix: &str) -> Self {
        let mut versions: Vec<Version> = tags
            .iter()
            .filter_map(|tag| Version::parse(tag.as_ref(), prefix).ok())
            .collect();

        versions.sort_by(|a, b| b.cmp(a));

        VersionList { versions }
    }

    /// Return a new list containing only final releases, order preserved
    pub fn without_pre_release(&self) -> Self {
        VersionList {
            versions: self
                .versions
                .iter()
                .filter(|v| !v.is_pre_release())
                .cloned()
                .collect(),
        }
    }

    /// The greatest version in the list
    pub fn latest(&self) -> Result<&Version> {
        self.versions.first().ok_or(SemvError::EmptyList)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.versions.iter()
    }
}

impl fmt::Display for VersionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.versions.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tags_sorted_descending() {
        let tags = ["v1.0.0", "v2.0.0", "v1.5.0"];
        let list = VersionList::from_tags(&tags, "v");
        let rendered: Vec<String> = list.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["v2.0.0", "v1.5.0", "v1.0.0"]);
    }

    #[test]
    fn test_from_tags_drops_unparsable() {
        let tags = ["not-a-version", "v1.0.0", "v1.x.0", "1.2.3"];
        let list = VersionList::from_tags(&tags, "v");
        assert_eq!(list.len(), 1);
        assert_eq!(list.latest().unwrap().to_string(), "v1.0.0");
    }

    #[test]
    fn test_from_tags_pre_release_sorts_before_final() {
        let tags = ["v1.2.0-rc.0", "v1.2.0", "v1.1.0"];
        let list = VersionList::from_tags(&tags, "v");
        let rendered: Vec<String> = list.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["v1.2.0", "v1.2.0-rc.0", "v1.1.0"]);
    }

    #[test]
    fn test_without_pre_release_filters_and_preserves_order() {
        let tags = ["v1.0.0", "v1.1.0-rc.0", "v2.0.0"];
        let list = VersionList::from_tags(&tags, "v");
        let filtered = list.without_pre_release();
        let rendered: Vec<String> = filtered.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["v2.0.0", "v1.0.0"]);
        // receiver unchanged
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_latest_on_empty_list() {
        let list = VersionList::from_tags::<&str>(&[], "v");
        assert!(matches!(list.latest(), Err(SemvError::EmptyList)));
    }

    #[test]
    fn test_latest_includes_pre_release_when_greatest() {
        let tags = ["v1.2.0", "v1.3.0-rc.0"];
        let list = VersionList::from_tags(&tags, "v");
        assert_eq!(list.latest().unwrap().to_string(), "v1.3.0-rc.0");
    }

    #[test]
    fn test_display_newline_joined() {
        let tags = ["v1.0.0", "v2.0.0"];
        let list = VersionList::from_tags(&tags, "v");
        assert_eq!(list.to_string(), "v2.0.0\nv1.0.0");
    }

    #[test]
    fn test_display_empty_list() {
        let list = VersionList::from_tags::<&str>(&[], "v");
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn test_display_uses_each_versions_own_prefix() {
        let tags = ["release-1.0.0", "release-2.0.0"];
        let list = VersionList::from_tags(&tags, "release-");
        assert_eq!(list.to_string(), "release-2.0.0\nrelease-1.0.0");
    }
}
