pub mod batch;
pub mod config;
pub mod error;
pub mod extent;
pub mod language;
pub mod markers;
pub mod renderer;
pub mod sequence;

pub use error::{LinemarkError, LinemarkResult};
pub use extent::{compute_extent, ChangedExtent, Extent};
pub use markers::MarkerPair;
pub use renderer::{DetailLevel, LineRenderer};
pub use sequence::{CharSequence, MbString};

use anyhow::{Context, Result};
use std::path::Path;

use language::Language;

/// Project-configured renderer and message catalogue.
pub struct Linemark {
    config: config::Config,
    renderer: Box<dyn LineRenderer>,
    language: Language,
}

impl Linemark {
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let config = config::Config::load_or_default(project_root)?;
        Self::from_config(config)
    }

    pub fn init(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();
        config::Config::init(project_root)?;

        Self::new(project_root)
    }

    pub fn from_config(config: config::Config) -> Result<Self> {
        let renderer = config
            .data
            .renderer
            .detail_level
            .build(config.data.renderer.markers());

        let language = Self::load_language(&config, &config.data.language.name)
            .with_context(|| format!("Failed to load language '{}'", config.data.language.name))?;

        Ok(Self {
            config,
            renderer,
            language,
        })
    }

    /// Load `name` from the configured language source with the configured
    /// placeholder delimiters.
    pub fn load_language(config: &config::Config, name: &str) -> LinemarkResult<Language> {
        let language = Language::with_source(config.language_directory(), name)?
            .with_delimiters(config.data.language.delimiters())?;
        Ok(language)
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    pub fn renderer(&self) -> &dyn LineRenderer {
        self.renderer.as_ref()
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Mark the changed extent of a single line pair.
    pub fn highlight(&self, old: &str, new: &str) -> (String, String) {
        self.renderer.render_pair(old, new)
    }

    /// Mark many line pairs in parallel, preserving order.
    pub fn highlight_all<S>(&self, pairs: &[(S, S)]) -> Vec<(String, String)>
    where
        S: AsRef<str> + Sync,
    {
        batch::highlight_pairs(self.renderer.as_ref(), pairs)
    }

    pub fn translate(&self, key: &str, placeholders: &[(&str, &str)]) -> String {
        self.language.translate(key, placeholders)
    }
}
