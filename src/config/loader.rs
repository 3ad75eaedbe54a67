//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineSettings, SourceConfig};

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// source:
///   format: csv        # source format tag
///   separator: ","     # single ASCII character
///   has_header: false  # skip the first row
/// engine:
///   parallel: false    # process projects on a thread pool
/// ```
///
/// # Example
///
/// ```no_run
/// use overlap_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./overlap.yaml").unwrap();
/// println!("Separator: {}", loader.source().separator);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or invalid values (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use overlap_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./overlap.yaml")?;
    /// # Ok::<(), overlap_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        debug!(path = %path_str, config = ?loader.config, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the text in error messages. Blank input yields the
    /// default configuration.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<EngineConfig>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the source settings.
    pub fn source(&self) -> &SourceConfig {
        &self.config.source
    }

    /// Returns the computation settings.
    pub fn engine(&self) -> &EngineSettings {
        &self.config.engine
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
