//! Shared graphic content: artboard geometry and gradient table

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::PackageError;
use crate::model::{Bounds, GradientDef, GradientKind, GradientStop, Viewport};

use super::artwork::RawColor;
use super::{read_json, PackageSource};

pub const RESOURCES_PATH: &str = "resources/graphics/graphicContent.agc";

#[derive(Debug, Deserialize)]
struct RawGraphicContent {
    #[serde(default)]
    resources: RawResources,
    #[serde(default)]
    artboards: IndexMap<String, RawArtboardInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct RawResources {
    #[serde(default)]
    gradients: IndexMap<String, RawGradient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtboardInfo {
    name: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    width: f64,
    height: f64,
    viewport_width: Option<f64>,
    viewport_height: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawGradient {
    #[serde(rename = "type")]
    kind: RawGradientKind,
    #[serde(default)]
    stops: Vec<RawStop>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawGradientKind {
    Linear,
    Radial,
}

#[derive(Debug, Deserialize)]
struct RawStop {
    offset: f64,
    color: RawColor,
}

/// Geometry of an artboard as declared in the shared graphic content
#[derive(Debug, Clone, PartialEq)]
pub struct ArtboardInfo {
    pub name: String,
    pub bounds: Bounds,
    pub viewport: Viewport,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicContent {
    /// Keyed by artboard name
    pub artboards: IndexMap<String, ArtboardInfo>,
    /// In package order
    pub gradients: IndexMap<String, GradientDef>,
}

impl GraphicContent {
    pub fn read(source: &dyn PackageSource) -> Result<Self, PackageError> {
        let raw: RawGraphicContent = read_json(source, RESOURCES_PATH)?;

        let artboards = raw
            .artboards
            .into_values()
            .map(|info| {
                let artboard = ArtboardInfo {
                    bounds: Bounds::new(info.x, info.y, info.width, info.height),
                    viewport: Viewport {
                        width: info.viewport_width,
                        height: info.viewport_height,
                    },
                    name: info.name,
                };
                (artboard.name.clone(), artboard)
            })
            .collect();

        let gradients = raw
            .resources
            .gradients
            .into_iter()
            .map(|(id, gradient)| {
                let kind = match gradient.kind {
                    RawGradientKind::Linear => GradientKind::Linear,
                    RawGradientKind::Radial => GradientKind::Radial,
                };
                let stops = gradient
                    .stops
                    .into_iter()
                    .map(|stop| GradientStop {
                        offset: stop.offset,
                        color: stop.color.into_color(),
                    })
                    .collect();
                (id, GradientDef { kind, stops })
            })
            .collect();

        Ok(Self {
            artboards,
            gradients,
        })
    }
}
