use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigData;
use crate::error::ConfigError;

pub const CONFIG_DIR: &str = ".linemark";
pub const CONFIG_FILE: &str = "config.toml";

/// What `get("language.directory")` shows when no directory is configured.
pub const BUNDLED_DIRECTORY: &str = "(bundled)";

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub path: PathBuf,
}

impl Config {
    pub fn load_or_default(project_root: impl AsRef<Path>) -> Result<Self> {
        let config_path = project_root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        let data = if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            ConfigData::default()
        };

        Ok(Self {
            data,
            path: config_path,
        })
    }

    pub fn init(project_root: impl AsRef<Path>) -> Result<()> {
        let config_dir = project_root.as_ref().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).context("Failed to create .linemark directory")?;

        let config_path = config_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            let content = toml::to_string_pretty(&ConfigData::default())
                .context("Failed to serialize initial config")?;
            fs::write(&config_path, content).context("Failed to write initial config")?;
        }

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.data)
            .context("Failed to serialize config")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&self.path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Configured language files directory, or `None` for the languages
    /// built into the binary. Relative paths are taken from the project root.
    pub fn language_directory(&self) -> Option<PathBuf> {
        self.data.language.directory.as_ref().map(|dir| {
            if dir.is_relative() {
                self.project_root().join(dir)
            } else {
                dir.clone()
            }
        })
    }

    fn project_root(&self) -> &Path {
        self.path
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."))
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "renderer.detail_level" => {
                self.data.renderer.detail_level = value.parse()?;
            }
            "renderer.open_marker" => self.data.renderer.open_marker = value.to_string(),
            "renderer.close_marker" => self.data.renderer.close_marker = value.to_string(),
            "language.name" => self.data.language.name = value.to_string(),
            "language.directory" => {
                self.data.language.directory = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "language.placeholder_open" => {
                self.data.language.placeholder_open = value.to_string();
            }
            "language.placeholder_close" => {
                self.data.language.placeholder_close = value.to_string();
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        }

        self.save()?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "version" => self.data.version.clone(),
            "renderer.detail_level" => self.data.renderer.detail_level.to_string(),
            "renderer.open_marker" => self.data.renderer.open_marker.clone(),
            "renderer.close_marker" => self.data.renderer.close_marker.clone(),
            "language.name" => self.data.language.name.clone(),
            "language.directory" => match self.language_directory() {
                Some(dir) => dir.display().to_string(),
                None => BUNDLED_DIRECTORY.to_string(),
            },
            "language.placeholder_open" => self.data.language.placeholder_open.clone(),
            "language.placeholder_close" => self.data.language.placeholder_close.clone(),
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        };

        Ok(value)
    }

    /// All readable keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        const KEYS: [&str; 8] = [
            "version",
            "renderer.detail_level",
            "renderer.open_marker",
            "renderer.close_marker",
            "language.name",
            "language.directory",
            "language.placeholder_open",
            "language.placeholder_close",
        ];

        KEYS.iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            path: PathBuf::from(CONFIG_DIR).join(CONFIG_FILE),
        }
    }
}
