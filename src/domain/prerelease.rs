//! Pre-release suffix handling for semantic versioning
//!
//! A pre-release is an identifier with an optional numeric counter, e.g.
//! "rc.0" or "beta.2". A version carrying one sorts before the final
//! release with the same numeric core.

use crate::error::{Result, SemvError};
use std::fmt;

/// Identifier used when no pre-release name is supplied
pub const DEFAULT_IDENTIFIER: &str = "rc";

/// Pre-release suffix with an optional numeric counter
///
/// Derived ordering compares the identifier lexicographically first, then
/// the counter numerically; a missing counter sorts before counter 0.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PreRelease {
    /// The pre-release identifier ("rc", "beta", "alpha.hotfix", ...)
    pub identifier: String,
    /// Optional numeric counter ("rc.0" -> 0)
    pub counter: Option<u32>,
}

impl PreRelease {
    /// Create a new pre-release suffix
    pub fn new(identifier: impl Into<String>, counter: Option<u32>) -> Self {
        PreRelease {
            identifier: identifier.into(),
            counter,
        }
    }

    /// Parse a pre-release suffix from a string
    ///
    /// The identifier is kept verbatim except for a trailing `.<digits>`
    /// segment, which becomes the numeric counter: "rc.0" -> ("rc", 0),
    /// "alpha.hotfix" -> ("alpha.hotfix", no counter).
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(SemvError::parse(s, "empty pre-release identifier"));
        }

        let valid = regex::Regex::new(r"^[0-9A-Za-z.-]+$")
            .map(|re| re.is_match(s))
            .unwrap_or(false);
        if !valid {
            return Err(SemvError::parse(
                s,
                "pre-release identifier may only contain alphanumerics, '.' and '-'",
            ));
        }

        if let Some((identifier, last)) = s.rsplit_once('.') {
            if !identifier.is_empty() && !last.is_empty() {
                if let Ok(counter) = last.parse::<u32>() {
                    return Ok(PreRelease::new(identifier, Some(counter)));
                }
            }
        }

        Ok(PreRelease::new(s, None))
    }

    /// Return the next counter value for the same identifier
    ///
    /// A missing counter becomes 0 so that "rc" advances to "rc.0",
    /// matching the ordering where "rc" sorts before "rc.0".
    pub fn increment(&self) -> Self {
        let counter = match self.counter {
            Some(n) => Some(n + 1),
            None => Some(0),
        };

        PreRelease {
            identifier: self.identifier.clone(),
            counter,
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(counter) = self.counter {
            write!(f, ".{}", counter)?;
        }
        Ok(())
    }
}
