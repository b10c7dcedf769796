//! Conversion configuration
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! single = true
//! legacy_gradient_order = false
//!
//! [svg]
//! pretty_print = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::{GradientOrder, SvgConfig};

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Produce one combined output instead of one document per artboard
    pub single: bool,
    /// Emit gradients the way the legacy converter did (see [`GradientOrder::Legacy`])
    pub legacy_gradient_order: bool,
    /// Markup output options
    pub svg: SvgConfig,
}

impl ConvertConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set single-output mode
    pub fn with_single(mut self, single: bool) -> Self {
        self.single = single;
        self
    }

    /// Set legacy gradient ordering
    pub fn with_legacy_gradient_order(mut self, legacy: bool) -> Self {
        self.legacy_gradient_order = legacy;
        self
    }

    /// Set the SVG output configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    pub fn gradient_order(&self) -> GradientOrder {
        if self.legacy_gradient_order {
            GradientOrder::Legacy
        } else {
            GradientOrder::All
        }
    }
}
