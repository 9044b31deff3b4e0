// File: src/config.rs
// Purpose: Configuration parsing from rollcall.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::validation::Policy;
use crate::DEFAULT_STORE_PATH;

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "rollcall.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Record store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Record file (default: "students.csv")
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

/// Admission limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_min_age")]
    pub min_age: i32,

    #[serde(default = "default_max_age")]
    pub max_age: i32,
}

// Default values
fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_min_age() -> i32 {
    Policy::default().min_age
}

fn default_max_age() -> i32 {
    Policy::default().max_age
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_age: default_min_age(),
            max_age: default_max_age(),
        }
    }
}

impl PolicyConfig {
    pub fn to_policy(&self) -> Policy {
        Policy {
            min_age: self.min_age,
            max_age: self.max_age,
            ..Policy::default()
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config
            .check()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.policy.min_age < 0 {
            anyhow::bail!("policy.min_age ({}) must not be negative", self.policy.min_age);
        }
        if self.policy.min_age > self.policy.max_age {
            anyhow::bail!(
                "policy.min_age ({}) is greater than policy.max_age ({})",
                self.policy.min_age,
                self.policy.max_age
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store.path, PathBuf::from("students.csv"));
        assert_eq!(config.policy.min_age, 16);
        assert_eq!(config.policy.max_age, 60);
        assert_eq!(config.policy.to_policy(), Policy::default());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [policy]
            max_age = 45
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.policy.min_age, 16);
        assert_eq!(config.policy.max_age, 45);
        assert_eq!(config.store.path, PathBuf::from("students.csv"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path().join("rollcall.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rollcall.toml");
        fs::write(&path, "[store]\npath = \"records/students.csv\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.store.path, PathBuf::from("records/students.csv"));
    }

    #[test]
    fn test_rejects_inverted_age_range() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rollcall.toml");
        fs::write(&path, "[policy]\nmin_age = 50\nmax_age = 20\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("greater than"));
    }

    #[test]
    fn test_rejects_negative_min_age() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rollcall.toml");
        fs::write(&path, "[policy]\nmin_age = -1\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("must not be negative"));
    }

    #[test]
    fn test_accepts_zero_min_age() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rollcall.toml");
        fs::write(&path, "[policy]\nmin_age = 0\n").unwrap();

        assert_eq!(Config::load(&path).unwrap().policy.min_age, 0);
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rollcall.toml");
        fs::write(&path, "[policy\n").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
