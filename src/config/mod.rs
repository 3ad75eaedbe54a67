//! Configuration loading and management for the Overlap Engine.
//!
//! This module provides functionality to load the engine configuration from a
//! YAML file: how the source is read and how the computation runs.
//!
//! # Example
//!
//! ```no_run
//! use overlap_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./overlap.yaml").unwrap();
//! println!("Source format: {}", config.source().format);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineSettings, Separator, SourceConfig};
