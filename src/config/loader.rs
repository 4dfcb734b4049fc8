//! Configuration file loading

use super::ConfigValidator;
use crate::constants;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External binary every invocation runs
    pub git: String,
    /// Remote used by fork, branch removal and remote queries
    pub remote: String,
    /// Line that ends the interactive terminal
    pub escape: String,
    /// Keep the interactive terminal running after a failed command
    pub keep_alive: bool,
    /// Colored output
    pub color: bool,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for this run
    ///
    /// An explicit path must exist. Without one, the default file in the
    /// working directory is used when present, built-in defaults otherwise.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(constants::config::DEFAULT_CONFIG_FILE).exists() => {
                Self::load(constants::config::DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git: constants::git::DEFAULT_BINARY.to_string(),
            remote: constants::git::DEFAULT_REMOTE.to_string(),
            escape: constants::config::DEFAULT_ESCAPE.to_string(),
            keep_alive: false,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.git, "git");
        assert_eq!(config.remote, "origin");
        assert_eq!(config.escape, "");
        assert!(!config.keep_alive);
        assert!(config.color);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gitp.yaml");
        std::fs::write(&path, "remote: upstream\nkeep_alive: true\n").unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.remote, "upstream");
        assert!(config.keep_alive);
        assert_eq!(config.git, "git");
        assert!(config.color);
    }

    #[test]
    fn test_load_rejects_invalid_remote() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gitp.yaml");
        std::fs::write(&path, "remote: \"\"\n").unwrap();

        let result = Config::load(path.to_str().unwrap());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("remote"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/gitp.yaml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gitp.yaml");
        std::fs::write(&path, "keep_alive: [not, a, bool]\n").unwrap();

        let result = Config::load(path.to_str().unwrap());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    #[serial]
    fn test_resolve_picks_up_default_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("gitp.yaml"), "escape: exit\n").unwrap();

        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();
        let result = Config::resolve(None);
        std::env::set_current_dir(original_dir).unwrap();

        assert_eq!(result.unwrap().escape, "exit");
    }

    #[test]
    #[serial]
    fn test_resolve_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();
        let result = Config::resolve(None);
        std::env::set_current_dir(original_dir).unwrap();

        assert_eq!(result.unwrap(), Config::default());
    }
}
