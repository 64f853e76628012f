//! Client configuration management.
//!
//! This module handles loading and saving the client configuration, which
//! holds the backend base URL and the directory for the durable store.
//!
//! Configuration is stored at `~/.config/quizgate/config.json`. The
//! `QUIZ_API_URL` and `QUIZ_STORE_DIR` environment variables (also read
//! from a `.env` file) take precedence over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application name used for config/data directory paths
const APP_NAME: &str = "quizgate";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Backend base URL used when nothing is configured (Flask dev server)
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

pub const API_URL_ENV: &str = "QUIZ_API_URL";
pub const STORE_DIR_ENV: &str = "QUIZ_STORE_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            store_dir: None,
        }
    }
}

impl Config {
    /// Load the config file (if any), then apply `.env` and environment overrides
    pub fn load() -> Result<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(STORE_DIR_ENV).ok(),
        );
        debug!(api_url = %config.api_url, store_dir = ?config.store_dir, "Config loaded");
        Ok(config)
    }

    /// Read a config file, falling back to defaults when it does not exist.
    /// No environment overrides are applied.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Empty values are ignored
    pub fn apply_overrides(&mut self, api_url: Option<String>, store_dir: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(dir) = store_dir.filter(|d| !d.trim().is_empty()) {
            self.store_dir = Some(PathBuf::from(dir.trim()));
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory holding the durable store
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = Config::default();
        config.apply_overrides(
            Some(" https://quiz.example.com/api ".to_string()),
            Some("/tmp/quiz".to_string()),
        );
        assert_eq!(config.api_url, "https://quiz.example.com/api");
        assert_eq!(config.store_dir().unwrap(), PathBuf::from("/tmp/quiz"));
    }

    #[test]
    fn test_saved_config_loads_back() {
        let path = std::env::temp_dir()
            .join(format!("quizgate-config-{}", std::process::id()))
            .join(CONFIG_FILE);
        let _ = std::fs::remove_file(&path);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let config = Config {
            api_url: "https://quiz.example.com/api".to_string(),
            store_dir: Some(PathBuf::from("/var/lib/quiz")),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_empty_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(Some(String::new()), Some("   ".to_string()));
        assert_eq!(config, Config::default());
    }
}
