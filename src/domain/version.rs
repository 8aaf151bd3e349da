//! Semantic version value type: parsing, precedence, bumping, annotation

use crate::domain::prerelease::{self, PreRelease};
use crate::error::{Result, SemvError};
use crate::git::BuildMetadata;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A parsed semantic version, including the tag prefix it was written with
///
/// The prefix is preserved verbatim for rendering and ignored for
/// comparison. Build metadata never affects ordering or equality.
#[derive(Debug, Clone)]
pub struct Version {
    pub prefix: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Option<PreRelease>,
    pub build: Option<String>,
}

/// The axis along which a version is bumped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl FromStr for BumpKind {
    type Err = SemvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(SemvError::InvalidBumpKind(other.to_string())),
        }
    }
}

impl Version {
    /// Create a final-release version with the given prefix
    pub fn new(prefix: impl Into<String>, major: u32, minor: u32, patch: u32) -> Self {
        Version {
            prefix: prefix.into(),
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Parse a version from a tag string
    ///
    /// Expected shape: `prefix + major.minor.patch[-pre][+build]`. A
    /// non-empty prefix must be present on the tag. Build metadata is kept
    /// verbatim; the pre-release part follows the rules of
    /// [PreRelease::parse].
    pub fn parse(tag: &str, prefix: &str) -> Result<Self> {
        let rest = if prefix.is_empty() {
            tag
        } else {
            tag.strip_prefix(prefix).ok_or_else(|| {
                SemvError::parse(tag, format!("missing '{}' prefix", prefix))
            })?
        };

        let (rest, build) = match rest.split_once('+') {
            Some((_, b)) if b.is_empty() => {
                return Err(SemvError::parse(tag, "empty build metadata"));
            }
            Some((left, b)) => (left, Some(b.to_string())),
            None => (rest, None),
        };

        let (core, pre_release) = match rest.split_once('-') {
            Some((left, p)) => {
                let pre = PreRelease::parse(p)
                    .map_err(|_| SemvError::parse(tag, "invalid pre-release identifier"))?;
                (left, Some(pre))
            }
            None => (rest, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(SemvError::parse(tag, "expected major.minor.patch"));
        }

        let component = |name: &str, raw: &str| -> Result<u32> {
            if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
                return Err(SemvError::parse(
                    tag,
                    format!("invalid {} component '{}'", name, raw),
                ));
            }
            raw.parse::<u32>()
                .map_err(|_| SemvError::parse(tag, format!("{} component out of range", name)))
        };

        Ok(Version {
            prefix: prefix.to_string(),
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            patch: component("patch", parts[2])?,
            pre_release,
            build,
        })
    }

    /// Compute the next version along the given axis
    ///
    /// The result is always a final release: pre-release and build
    /// suffixes are cleared, never carried over from the base.
    pub fn next(&self, kind: BumpKind) -> Self {
        let (major, minor, patch) = match kind {
            BumpKind::Major => (self.major + 1, 0, 0),
            BumpKind::Minor => (self.major, self.minor + 1, 0),
            BumpKind::Patch => (self.major, self.minor, self.patch + 1),
        };

        Version {
            prefix: self.prefix.clone(),
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Return a copy carrying a pre-release suffix
    ///
    /// An empty name selects the default identifier with counter 0
    /// ("rc.0"). A supplied name is parsed like a tag suffix, so an
    /// embedded counter ("beta.2") is kept. When the receiver already
    /// carries a pre-release with the same identifier and no explicit
    /// counter was requested, the counter advances instead of resetting.
    pub fn with_pre_release(&self, name: &str) -> Result<Self> {
        let requested = if name.is_empty() {
            PreRelease::new(prerelease::DEFAULT_IDENTIFIER, None)
        } else {
            PreRelease::parse(name)?
        };

        let pre = match (&self.pre_release, requested.counter) {
            (_, Some(_)) => requested,
            (Some(current), None) if current.identifier == requested.identifier => {
                current.increment()
            }
            (_, None) => PreRelease::new(requested.identifier, Some(0)),
        };

        Ok(Version {
            pre_release: Some(pre),
            ..self.clone()
        })
    }

    /// Return a copy carrying build metadata
    ///
    /// The build string is `<short-commit>.<name>`, where `name` falls
    /// back to the local username when empty. Provider failures propagate
    /// as [SemvError::Metadata].
    pub fn with_build(&self, name: &str, metadata: &dyn BuildMetadata) -> Result<Self> {
        let commit = metadata.latest_commit()?;
        let label = if name.is_empty() {
            metadata.current_user()?
        } else {
            name.to_string()
        };

        Ok(Version {
            build: Some(format!("{}.{}", commit, label)),
            ..self.clone()
        })
    }

    /// Whether this version carries a pre-release suffix
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            self.prefix, self.major, self.minor, self.patch
        )?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality must agree with the ordering: prefix and build are excluded.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
