//! Per-artboard document assembly

use tracing::debug;

use crate::error::ConvertError;
use crate::model::{ArtboardDescriptor, ResourceIndex};

use super::defs::PatternDefs;
use super::element::{Element, SVG_NS};
use super::style::StyleResolver;
use super::walker::SceneWalker;
use super::SvgConfig;

/// One converted artboard together with the patterns it introduced
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedArtboard {
    pub name: String,
    pub document: Element,
    pub patterns: PatternDefs,
}

impl ConvertedArtboard {
    /// Serialize the document
    pub fn to_markup(&self, config: &SvgConfig) -> String {
        let mut out = String::new();
        if config.xml_declaration {
            out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            out.push('\n');
        }
        out.push_str(&self.document.to_markup(config));
        out
    }
}

/// Id of the pattern used by an artboard's background rectangle
pub fn background_pattern_id(artboard_id: &str) -> String {
    format!("{}-background", artboard_id)
}

/// Convert one artboard into a standalone `<svg>` document.
///
/// Pattern definitions are returned rather than embedded; the batch driver
/// emits them once for all artboards.
pub fn convert_artboard(
    artboard: &ArtboardDescriptor,
    resources: &ResourceIndex,
) -> Result<ConvertedArtboard, ConvertError> {
    debug!(id = %artboard.id, name = %artboard.name, "converting artboard");

    let b = &artboard.bounds;
    let mut svg = Element::new("svg")
        .with_attr("xmlns", SVG_NS)
        .with_attr("id", &artboard.id)
        .with_attr("viewBox", format!("{} {} {} {}", b.x, b.y, b.width, b.height))
        .with_attr(
            "enable-background",
            format!("new {} {} {} {}", b.x, b.y, b.width, b.height),
        );
    if let Some(width) = artboard.viewport.width {
        svg.set_attr("width", width);
    }
    if let Some(height) = artboard.viewport.height {
        svg.set_attr("height", height);
    }

    let mut title = Element::new("title");
    title.append_text(&artboard.name);
    svg.append(title);

    let mut patterns = PatternDefs::new();
    let mut resolver = StyleResolver::new(resources, &mut patterns);

    let mut background = Element::new("rect")
        .with_attr("width", b.width)
        .with_attr("height", b.height);
    if let Some(style) = &artboard.style {
        resolver.resolve(style, &mut background, &background_pattern_id(&artboard.id))?;
    }
    svg.append(background);

    SceneWalker::new(&mut resolver).walk(&artboard.children, &mut svg)?;

    debug!(id = %artboard.id, patterns = patterns.len(), "artboard converted");
    Ok(ConvertedArtboard {
        name: artboard.name.clone(),
        document: svg,
        patterns,
    })
}
