//! Shared configuration loader for the figtree toolchain.
//!
//! `defaults/figtree.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files and `FIGTREE_*` environment variables on top of those defaults via
//! [`Loader`] before deserializing into [`FigtreeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/figtree.default.toml");

/// Top-level configuration consumed by figtree applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FigtreeConfig {
    pub figma: FigmaConfig,
    pub output: OutputConfig,
    pub split: SplitConfig,
    pub analysis: AnalysisConfig,
}

/// Credentials and target selection for the Figma API.
#[derive(Debug, Clone, Deserialize)]
pub struct FigmaConfig {
    pub access_token: String,
    pub file_key: String,
    /// Target node id, colon-separated as the API expects ("1619:4").
    pub node_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: String,
}

/// Knobs for frame splitting.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitConfig {
    pub max_elements_per_frame: usize,
    pub min_frame_children: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub spacing_base: u32,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `FIGTREE_*` environment variables, e.g.
    /// `FIGTREE_FIGMA__ACCESS_TOKEN` for `figma.access_token`.
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix("FIGTREE").separator("__");
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<FigtreeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FigtreeConfig, ConfigError> {
    Loader::new().build()
}
