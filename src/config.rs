use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SemvError};

/// Represents the complete configuration for git-semv.
///
/// Holds defaults the CLI flags can override: the repository to query,
/// the tag prefix, and the pre-release identifier.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub repository: Option<String>,

    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub pre_release: PreReleaseConfig,
}

/// Returns the default tag prefix.
fn default_prefix() -> String {
    "v".to_string()
}

/// Configuration for pre-release annotation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PreReleaseConfig {
    #[serde(default = "default_identifier")]
    pub identifier: String,
}

/// Returns the default pre-release identifier.
fn default_identifier() -> String {
    crate::domain::prerelease::DEFAULT_IDENTIFIER.to_string()
}

impl Default for PreReleaseConfig {
    fn default() -> Self {
        PreReleaseConfig {
            identifier: default_identifier(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository: None,
            prefix: default_prefix(),
            pre_release: PreReleaseConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemv.toml` in current directory
/// 3. `.gitsemv.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitsemv.toml").exists() {
        fs::read_to_string("./gitsemv.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitsemv.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| SemvError::config(format!("invalid gitsemv.toml: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.repository, None);
        assert_eq!(config.prefix, "v");
        assert_eq!(config.pre_release.identifier, "rc");
    }

    #[test]
    fn test_config_parse_full() {
        let config: Config = toml::from_str(
            r#"
            repository = "acme/widget"
            prefix = "release-"

            [pre_release]
            identifier = "beta"
            "#,
        )
        .unwrap();

        assert_eq!(config.repository.as_deref(), Some("acme/widget"));
        assert_eq!(config.prefix, "release-");
        assert_eq!(config.pre_release.identifier, "beta");
    }

    #[test]
    fn test_config_parse_partial_fills_defaults() {
        let config: Config = toml::from_str(r#"repository = "acme/widget""#).unwrap();
        assert_eq!(config.repository.as_deref(), Some("acme/widget"));
        assert_eq!(config.prefix, "v");
        assert_eq!(config.pre_release.identifier, "rc");
    }

    #[test]
    fn test_load_config_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "repository = \"acme/widget\"").unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.repository.as_deref(), Some("acme/widget"));
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let result = load_config(Some("/nonexistent/gitsemv.toml"));
        assert!(matches!(result, Err(SemvError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "prefix = [not toml").unwrap();

        let result = load_config(file.path().to_str());
        assert!(matches!(result, Err(SemvError::Config(_))));
    }
}
