//! Configuration for markup serialization

use serde::Deserialize;

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Whether to prefix each document with an XML declaration
    pub xml_declaration: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            xml_declaration: false,
            pretty_print: false,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether documents start with an XML declaration
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert!(!config.xml_declaration);
        assert!(!config.pretty_print);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_xml_declaration(true)
            .with_pretty_print(true);

        assert!(config.xml_declaration);
        assert!(config.pretty_print);
    }
}
