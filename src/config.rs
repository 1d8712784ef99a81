//! Configuration handling for the TUI

use crate::validation::rules::{Rules, DEFAULT_DOB_FORMAT};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegFormConfig {
    /// Accepted date-of-birth formats (chrono syntax), tried in order
    pub dob_formats: Option<Vec<String>>,
    /// Start with password inputs in plain text
    pub reveal_passwords: Option<bool>,
}

impl RegFormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "regform", "regform-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user's config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when it does not exist
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: RegFormConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validation rules with the configured overrides applied
    pub fn rules(&self) -> Rules {
        let dob_formats = match &self.dob_formats {
            Some(formats) if !formats.is_empty() => formats.clone(),
            _ => vec![DEFAULT_DOB_FORMAT.to_string()],
        };
        Rules { dob_formats }
    }

    pub fn reveal_passwords(&self) -> bool {
        self.reveal_passwords.unwrap_or(false)
    }
}
