pub mod project;

pub use project::Config;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::language::{Delimiters, DEFAULT_LANGUAGE};
use crate::markers::MarkerPair;
use crate::renderer::DetailLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    pub version: String,
    pub renderer: RendererConfig,
    pub language: LanguageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub detail_level: DetailLevel,
    pub open_marker: String,
    pub close_marker: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub name: String,
    pub directory: Option<PathBuf>,
    pub placeholder_open: String,
    pub placeholder_close: String,
}

impl RendererConfig {
    pub fn markers(&self) -> MarkerPair {
        MarkerPair::new(&self.open_marker, &self.close_marker)
    }
}

impl LanguageConfig {
    pub fn delimiters(&self) -> Delimiters {
        Delimiters::new(&self.placeholder_open, &self.placeholder_close)
    }
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            renderer: RendererConfig::default(),
            language: LanguageConfig::default(),
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        let markers = MarkerPair::default();
        Self {
            detail_level: DetailLevel::default(),
            open_marker: markers.open,
            close_marker: markers.close,
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        let delimiters = Delimiters::default();
        Self {
            name: DEFAULT_LANGUAGE.to_string(),
            directory: None,
            placeholder_open: delimiters.open,
            placeholder_close: delimiters.close,
        }
    }
}
