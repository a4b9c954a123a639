//! Persistent CLI configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use timesmart_core::util::normalize_text_option;

const CONFIG_FILE_NAME: &str = "cli-config.json";

pub const TIMETABLE_ENV: &str = "TIMESMART_TIMETABLE";
pub const USER_ENV: &str = "TIMESMART_USER";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub timetable_path: Option<PathBuf>,
    #[serde(default)]
    pub user: Option<String>,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> Result<PathBuf, String> {
    dirs::config_dir()
        .map(|dir| dir.join("timesmart").join(CONFIG_FILE_NAME))
        .ok_or_else(|| "Failed to resolve CLI config directory".to_string())
}

fn normalize_path_option(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|path| !path.as_os_str().is_empty())
}

impl CliConfig {
    pub fn load() -> Result<Self, String> {
        Self::load_from_path(&default_config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = default_config_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    /// Timetable path: explicit flag, then environment, then config file.
    pub fn resolve_timetable_path(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        normalize_path_option(explicit)
            .or_else(|| normalize_path_option(std::env::var_os(TIMETABLE_ENV).map(PathBuf::from)))
            .or_else(|| normalize_path_option(self.timetable_path.clone()))
    }

    /// Current user: explicit flag, then environment, then config file.
    pub fn resolve_user(&self, explicit: Option<String>) -> Option<String> {
        normalize_text_option(explicit)
            .or_else(|| normalize_text_option(std::env::var(USER_ENV).ok()))
            .or_else(|| normalize_text_option(self.user.clone()))
    }

    fn normalize(&mut self) {
        self.timetable_path = normalize_path_option(self.timetable_path.take());
        self.user = normalize_text_option(self.user.take());
    }
}
