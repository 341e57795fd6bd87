//! Configuration management for the action deck.
//!
//! Handles loading and saving configuration from JSONC files.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user's config dir.
pub const APP_DIR: &str = "action-deck";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deck file path (relative to config dir or absolute)
    pub deck_path: String,
    /// Application used to open external addresses (system default if unset)
    pub browser: Option<String>,
    /// Log filter directive, used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck_path: "deck.jsonc".to_string(),
            browser: None,
            log_filter: "info".to_string(),
        }
    }
}

/// Strip `//` line comments that are not inside a string.
pub fn strip_jsonc_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let mut prev_slash = false;
            for (i, ch) in line.char_indices() {
                if in_string {
                    match ch {
                        _ if escaped => escaped = false,
                        '\\' => escaped = true,
                        '"' => in_string = false,
                        _ => {}
                    }
                    continue;
                }
                match ch {
                    '"' => {
                        in_string = true;
                        prev_slash = false;
                    }
                    '/' if prev_slash => return line[..i - 1].trim_end(),
                    '/' => prev_slash = true,
                    _ => prev_slash = false,
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Reads `$XDG_CONFIG_HOME/action-deck/config.jsonc` by default.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_jsonc_comments(&content))
            .with_context(|| "Failed to deserialize config")?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    #[allow(dead_code)] // Useful for writing a starter config
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Directory holding config, deck and log files.
    pub fn app_dir() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join(APP_DIR))
    }

    /// Get default configuration file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.jsonc"))
    }

    /// Get deck file path.
    ///
    /// # Details
    /// If deck_path is absolute, returns it as-is.
    /// Otherwise, returns path relative to the app config directory.
    pub fn deck_file_path(&self) -> Result<PathBuf> {
        let deck_path = Path::new(&self.deck_path);
        if deck_path.is_absolute() {
            Ok(deck_path.to_path_buf())
        } else {
            Ok(Self::app_dir()?.join(deck_path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.deck_path, "deck.jsonc");
        assert!(config.browser.is_none());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.jsonc");

        let config = Config {
            browser: Some("firefox".to_string()),
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.browser.as_deref(), Some("firefox"));
        assert_eq!(loaded.deck_path, "deck.jsonc");
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("absent.jsonc"))).unwrap();
        assert_eq!(loaded.log_filter, "info");
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Where the cards live
            "deck_path": "/tmp/cards.jsonc", // absolute
            "log_filter": "debug"
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.deck_path, "/tmp/cards.jsonc");
        assert_eq!(loaded.log_filter, "debug");
        assert_eq!(
            loaded.deck_file_path().unwrap(),
            PathBuf::from("/tmp/cards.jsonc")
        );
    }

    #[test]
    fn test_strip_jsonc_keeps_slashes_in_strings() {
        let stripped = strip_jsonc_comments(r#"{"url": "https://example.com"} // link"#);
        assert_eq!(stripped, r#"{"url": "https://example.com"}"#);

        let escaped = strip_jsonc_comments(r#"{"m": "say \"//\" twice"}"#);
        assert_eq!(escaped, r#"{"m": "say \"//\" twice"}"#);
    }
}
