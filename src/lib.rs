//! xd2svg - Convert packaged design documents into SVG, one document per artboard
//!
//! This library loads a design package (a zip archive or an extracted
//! directory holding a JSON manifest, per-artboard scene descriptions and a
//! shared resource index), walks each artboard's scene graph and emits
//! standalone SVG markup.
//!
//! # Example
//!
//! ```rust
//! use xd2svg::model::{ArtboardDescriptor, Bounds, ResourceIndex, Viewport};
//! use xd2svg::{convert_artboards, ConvertConfig, Output};
//!
//! let artboard = ArtboardDescriptor {
//!     id: "a1".into(),
//!     name: "Home".into(),
//!     bounds: Bounds::new(0.0, 0.0, 100.0, 50.0),
//!     viewport: Viewport::default(),
//!     style: None,
//!     children: vec![],
//! };
//! let output = convert_artboards(&[artboard], &ResourceIndex::new(), &ConvertConfig::new()).unwrap();
//! let Output::Multiple { documents, .. } = output else { unreachable!() };
//! assert!(documents["Home"].contains(r#"viewBox="0 0 100 50""#));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod package;
pub mod renderer;

use std::path::Path;

use indexmap::IndexMap;
use tracing::{info, warn};

pub use config::{ConfigError, ConvertConfig};
pub use error::{ConvertError, Error, PackageError, ReferenceKind};
pub use package::{load_package, open_package, Package, PackageSource};
pub use renderer::{convert_artboard, ConvertedArtboard, SvgConfig};

use model::{ArtboardDescriptor, ResourceIndex};
use renderer::{build_gradient_defs, shared_defs, PatternDefs};

/// Result of a batch conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Shared definitions followed by every document, newline separated
    Single(String),
    /// Shared definitions block and one document per artboard name
    Multiple {
        defs: String,
        documents: IndexMap<String, String>,
    },
}

/// Convert a set of artboards sharing one resource index.
///
/// The first failing artboard aborts the whole batch.
pub fn convert_artboards(
    artboards: &[ArtboardDescriptor],
    resources: &ResourceIndex,
    config: &ConvertConfig,
) -> Result<Output, ConvertError> {
    let converted = convert_each(artboards, resources)?;

    let mut patterns = PatternDefs::new();
    for artboard in &converted {
        patterns.merge(artboard.patterns.clone())?;
    }
    let gradients = build_gradient_defs(&resources.gradients, config.gradient_order());
    info!(
        artboards = converted.len(),
        gradients = gradients.len(),
        patterns = patterns.len(),
        "conversion finished"
    );

    let defs = shared_defs(gradients, patterns).to_markup(&config.svg);

    if config.single {
        let mut parts = vec![defs];
        parts.extend(converted.iter().map(|artboard| artboard.to_markup(&config.svg)));
        return Ok(Output::Single(parts.join("\n")));
    }

    let mut documents = IndexMap::with_capacity(converted.len());
    for artboard in &converted {
        let markup = artboard.to_markup(&config.svg);
        if documents.insert(artboard.name.clone(), markup).is_some() {
            warn!(name = %artboard.name, "several artboards share this name, keeping the last one");
        }
    }
    Ok(Output::Multiple { defs, documents })
}

#[cfg(not(feature = "parallel"))]
fn convert_each(
    artboards: &[ArtboardDescriptor],
    resources: &ResourceIndex,
) -> Result<Vec<ConvertedArtboard>, ConvertError> {
    artboards
        .iter()
        .map(|artboard| convert_artboard(artboard, resources))
        .collect()
}

#[cfg(feature = "parallel")]
fn convert_each(
    artboards: &[ArtboardDescriptor],
    resources: &ResourceIndex,
) -> Result<Vec<ConvertedArtboard>, ConvertError> {
    use rayon::prelude::*;

    artboards
        .par_iter()
        .map(|artboard| convert_artboard(artboard, resources))
        .collect()
}

/// Load and convert a package from any source
pub fn convert_package(
    source: &dyn PackageSource,
    config: &ConvertConfig,
) -> Result<Output, Error> {
    let package = load_package(source)?;
    Ok(convert_artboards(
        &package.artboards,
        &package.resources,
        config,
    )?)
}

/// Load and convert a `.xd` file or extracted package directory
pub fn convert_path(path: &Path, config: &ConvertConfig) -> Result<Output, Error> {
    let source = open_package(path)?;
    convert_package(source.as_ref(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Bounds, Color, GradientDef, GradientKind, GradientStop, NodeKind, Paint, SceneNode,
        Shape, StyleSpec, Viewport,
    };

    fn artboard(id: &str, name: &str, children: Vec<SceneNode>) -> ArtboardDescriptor {
        ArtboardDescriptor {
            id: id.into(),
            name: name.into(),
            bounds: Bounds::new(0.0, 0.0, 10.0, 10.0),
            viewport: Viewport::default(),
            style: None,
            children,
        }
    }

    fn patterned(id: &str, resource: &str) -> SceneNode {
        SceneNode::new(
            id,
            NodeKind::Shape(Shape::Circle {
                cx: 1.0,
                cy: 1.0,
                r: 1.0,
            }),
        )
        .with_style(StyleSpec {
            fill: Some(
                Paint::PatternRef {
                    resource: resource.into(),
                    width: 2.0,
                    height: 2.0,
                }
                .into(),
            ),
            ..Default::default()
        })
    }

    fn resources() -> ResourceIndex {
        let gradient = GradientDef {
            kind: GradientKind::Linear,
            stops: vec![GradientStop {
                offset: 0.0,
                color: Color::rgb(0.0, 0.0, 0.0),
            }],
        };
        ResourceIndex::new()
            .with_data_uri("img", "data:image/png;base64,AA==")
            .with_gradient("g0", gradient.clone())
            .with_gradient("g1", gradient)
    }

    #[test]
    fn test_patterns_shared_across_artboards() {
        let boards = vec![
            artboard("a", "First", vec![patterned("n1", "img")]),
            artboard("b", "Second", vec![patterned("n2", "img")]),
        ];
        let output = convert_artboards(&boards, &resources(), &ConvertConfig::new()).unwrap();
        let Output::Multiple { defs, documents } = output else {
            panic!("expected multiple output");
        };

        assert_eq!(defs.matches("<pattern").count(), 2);
        assert!(defs.contains(r#"id="n1""#));
        assert!(defs.contains(r#"id="n2""#));
        assert_eq!(documents.keys().collect::<Vec<_>>(), vec!["First", "Second"]);
        assert!(!documents["First"].contains("<pattern"));
        assert!(documents["Second"].contains(r#"fill="url(#n2)""#));
    }

    #[test]
    fn test_single_output_starts_with_defs() {
        let boards = vec![artboard("a", "First", vec![]), artboard("b", "Second", vec![])];
        let output = convert_artboards(
            &boards,
            &resources(),
            &ConvertConfig::new().with_single(true),
        )
        .unwrap();
        let Output::Single(markup) = output else {
            panic!("expected single output");
        };

        let parts: Vec<&str> = markup.split('\n').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0].starts_with("<defs"));
        assert!(parts[1].contains(r#"id="a""#));
        assert!(parts[2].contains(r#"id="b""#));
    }

    #[test]
    fn test_gradient_order_follows_config() {
        let boards = vec![artboard("a", "First", vec![])];

        let all = convert_artboards(&boards, &resources(), &ConvertConfig::new()).unwrap();
        let Output::Multiple { defs, .. } = all else {
            panic!("expected multiple output");
        };
        assert!(defs.contains(r#"id="g0""#));
        assert!(defs.contains(r#"id="g1""#));

        let legacy = convert_artboards(
            &boards,
            &resources(),
            &ConvertConfig::new().with_legacy_gradient_order(true),
        )
        .unwrap();
        let Output::Multiple { defs, .. } = legacy else {
            panic!("expected multiple output");
        };
        assert!(!defs.contains(r#"id="g0""#));
        assert!(defs.contains(r#"id="g1""#));
    }

    #[test]
    fn test_duplicate_names_keep_last_document() {
        let boards = vec![artboard("a", "Same", vec![]), artboard("b", "Same", vec![])];
        let output = convert_artboards(&boards, &resources(), &ConvertConfig::new()).unwrap();
        let Output::Multiple { documents, .. } = output else {
            panic!("expected multiple output");
        };
        assert_eq!(documents.len(), 1);
        assert!(documents["Same"].contains(r#"id="b""#));
    }

    #[test]
    fn test_duplicate_names_all_present_in_single_output() {
        let boards = vec![artboard("a", "Same", vec![]), artboard("b", "Same", vec![])];
        let output = convert_artboards(
            &boards,
            &resources(),
            &ConvertConfig::new().with_single(true),
        )
        .unwrap();
        let Output::Single(markup) = output else {
            panic!("expected single output");
        };
        assert!(markup.contains(r#"id="a""#));
        assert!(markup.contains(r#"id="b""#));
    }

    #[test]
    fn test_failing_artboard_aborts_batch() {
        let boards = vec![
            artboard("a", "First", vec![]),
            artboard("b", "Second", vec![patterned("n1", "missing")]),
        ];
        let err = convert_artboards(&boards, &resources(), &ConvertConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnresolvedReference {
                kind: ReferenceKind::Pattern,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_node_ids_with_different_patterns_fail() {
        let resources = resources().with_data_uri("other", "data:image/png;base64,BB==");
        let boards = vec![
            artboard("a", "First", vec![patterned("n1", "img")]),
            artboard("b", "Second", vec![patterned("n1", "other")]),
        ];
        let err = convert_artboards(&boards, &resources, &ConvertConfig::new()).unwrap_err();
        assert_eq!(
            err,
            ConvertError::DuplicatePatternId {
                id: "n1".to_string()
            }
        );
    }
}
