// Grid configuration
// User-facing layout options, stored as TOML next to the other app settings

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GridError, GridResult};
use crate::layout::ClipMode;

const CONFIG_FILE_NAME: &str = "month_grid.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    pub clip_mode: ClipMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            clip_mode: ClipMode::Month,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> GridResult<()> {
        if self.first_day_of_week > 6 {
            return Err(GridError::Config(format!(
                "first_day_of_week must be 0-6 (Sunday-Saturday), got {}",
                self.first_day_of_week
            )));
        }
        Ok(())
    }

    pub fn from_toml(content: &str) -> GridResult<Self> {
        let config: GridConfig =
            toml::from_str(content).map_err(|e| GridError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> GridResult<String> {
        toml::to_string(self).map_err(|e| GridError::Config(e.to_string()))
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse grid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write grid config {}", path.display()))?;
        Ok(())
    }

    /// Per-user config location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "MonthGrid", "MonthGridLayout")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from `path`, falling back to defaults when the file is missing.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!(
                "No grid config at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load from the per-user location, or defaults.
    pub fn load_user_config() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                log::warn!("No config directory available on this platform; using defaults");
                Ok(Self::default())
            }
        }
    }
}
