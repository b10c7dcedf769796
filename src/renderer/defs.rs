//! Pattern accumulator and the shared definitions block

use crate::error::ConvertError;

use super::element::{Element, Node, SVG_NS, XLINK_NS};

/// Pattern definitions collected while walking artboards
///
/// Each artboard conversion returns its own accumulator; the batch driver
/// merges them in artboard order into one shared block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatternDefs {
    patterns: Vec<Element>,
}

impl PatternDefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern element keyed by its `id` attribute.
    ///
    /// Re-registering an identical definition is a no-op.
    pub fn register(&mut self, pattern: Element) -> Result<(), ConvertError> {
        let id = pattern.attr("id").unwrap_or_default();
        match self.patterns.iter().find(|p| p.attr("id") == Some(id)) {
            Some(existing) if *existing == pattern => Ok(()),
            Some(_) => Err(ConvertError::DuplicatePatternId { id: id.to_string() }),
            None => {
                self.patterns.push(pattern);
                Ok(())
            }
        }
    }

    /// Append every pattern of `other`, keeping ids unique
    pub fn merge(&mut self, other: PatternDefs) -> Result<(), ConvertError> {
        for pattern in other.patterns {
            self.register(pattern)?;
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.patterns.iter().find(|p| p.attr("id") == Some(id))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.patterns
    }
}

/// Build a pattern filled by one image
pub fn image_pattern(id: &str, href: &str, width: f64, height: f64) -> Element {
    let mut pattern = Element::new("pattern")
        .with_attr("id", id)
        .with_attr("patternUnits", "userSpaceOnUse")
        .with_attr("width", width)
        .with_attr("height", height);
    pattern.append(
        Element::new("image")
            .with_attr("xlink:href", href)
            .with_attr("x", 0)
            .with_attr("y", 0)
            .with_attr("width", width)
            .with_attr("height", height),
    );
    pattern
}

/// Wrap gradient and pattern definitions in one `<defs>` block
pub fn shared_defs(gradients: Vec<Element>, patterns: PatternDefs) -> Element {
    let mut defs = Element::new("defs")
        .with_attr("xmlns", SVG_NS)
        .with_attr("xmlns:xlink", XLINK_NS);
    defs.children = gradients
        .into_iter()
        .chain(patterns.into_elements())
        .map(Node::Element)
        .collect();
    defs
}
