//! Per-artboard scene description and its lowering into the model
//!
//! The raw structs mirror the package JSON. Lowering validates node and
//! shape kinds and turns paint objects into [`Paint`] variants; paints
//! without a recognised `type` tag become [`Paint::LegacyColor`].

use serde::Deserialize;
use tracing::warn;

use crate::error::{ConvertError, Error, PackageError};
use crate::model::{
    Color, FontSpec, FontWeight, Line, LinePart, NodeKind, Paint, PaintSpec, Paragraph,
    SceneNode, Shape, StyleSpec, TextNode, TransformSpec,
};

#[derive(Debug, Deserialize)]
pub struct RawArtwork {
    #[serde(default)]
    pub children: Vec<RawArtboardRoot>,
}

#[derive(Debug, Deserialize)]
pub struct RawArtboardRoot {
    pub id: String,
    pub style: Option<RawStyle>,
    #[serde(default)]
    pub artboard: RawChildren,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawChildren {
    #[serde(default)]
    pub children: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
pub struct RawNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub style: Option<RawStyle>,
    pub transform: Option<RawTransform>,
    #[serde(default)]
    pub shape: RawShape,
    #[serde(default)]
    pub text: RawText,
    #[serde(default)]
    pub group: RawChildren,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawShape {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub path: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub cx: f64,
    #[serde(default)]
    pub cy: f64,
    #[serde(default)]
    pub r: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawText {
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub paragraphs: Vec<RawParagraph>,
}

#[derive(Debug, Deserialize)]
pub struct RawParagraph {
    #[serde(default)]
    pub lines: Vec<Vec<RawLinePart>>,
}

#[derive(Debug, Deserialize)]
pub struct RawLinePart {
    pub from: usize,
    pub to: usize,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Only the translation of the package's affine matrix is read
#[derive(Debug, Deserialize)]
pub struct RawTransform {
    #[serde(default)]
    pub tx: f64,
    #[serde(default)]
    pub ty: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawStyle {
    pub fill: Option<RawPaint>,
    pub stroke: Option<RawPaint>,
    pub font: Option<RawFont>,
}

#[derive(Debug, Deserialize)]
pub struct RawPaint {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub color: Option<RawColor>,
    pub fill: Option<RawSolidFill>,
    pub gradient: Option<RawGradientRef>,
    pub pattern: Option<RawPattern>,
    pub width: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawSolidFill {
    pub color: RawColor,
}

#[derive(Debug, Deserialize)]
pub struct RawGradientRef {
    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Deserialize)]
pub struct RawPattern {
    pub width: f64,
    pub height: f64,
    pub meta: RawPatternMeta,
}

#[derive(Debug, Deserialize)]
pub struct RawPatternMeta {
    pub ux: RawPatternUx,
}

#[derive(Debug, Deserialize)]
pub struct RawPatternUx {
    pub uid: String,
}

#[derive(Debug, Deserialize)]
pub struct RawColor {
    pub mode: Option<String>,
    pub value: RawRgb,
    pub alpha: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawRgb {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
}

impl RawColor {
    pub fn into_color(self) -> Color {
        if let Some(mode) = self.mode.as_deref().filter(|m| *m != "RGB") {
            warn!(mode, "unsupported color mode, reading channels as RGB");
        }
        Color {
            r: self.value.r,
            g: self.value.g,
            b: self.value.b,
            alpha: self.alpha,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawFont {
    #[serde(default)]
    pub family: String,
    pub size: Option<f64>,
    pub style: Option<String>,
}

impl RawNode {
    /// Lower into a typed scene node, recursing into groups
    pub fn into_node(self) -> Result<SceneNode, Error> {
        let kind = match self.kind.as_str() {
            "shape" => NodeKind::Shape(lower_shape(&self.id, self.shape)?),
            "text" => NodeKind::Text(lower_text(self.text)),
            "group" => NodeKind::Group(
                self.group
                    .children
                    .into_iter()
                    .map(RawNode::into_node)
                    .collect::<Result<_, _>>()?,
            ),
            other => {
                return Err(ConvertError::UnknownNodeKind {
                    kind: other.to_string(),
                    node: self.id,
                }
                .into())
            }
        };

        Ok(SceneNode {
            style: self.style.map(|s| s.into_style(&self.id)).transpose()?,
            transform: self.transform.map(|t| TransformSpec::translate(t.tx, t.ty)),
            kind,
            id: self.id,
        })
    }
}

fn lower_shape(node: &str, shape: RawShape) -> Result<Shape, Error> {
    match shape.kind.as_str() {
        "path" => Ok(Shape::Path {
            d: shape.path.ok_or_else(|| PackageError::MalformedNode {
                node: node.to_string(),
                message: "path shape without path data".to_string(),
            })?,
        }),
        "rect" => Ok(Shape::Rect {
            x: shape.x,
            y: shape.y,
            width: shape.width,
            height: shape.height,
        }),
        "circle" => Ok(Shape::Circle {
            cx: shape.cx,
            cy: shape.cy,
            r: shape.r,
        }),
        other => Err(ConvertError::UnknownShapeKind {
            kind: other.to_string(),
            node: node.to_string(),
        }
        .into()),
    }
}

fn lower_text(text: RawText) -> TextNode {
    TextNode {
        raw_text: text.raw_text,
        paragraphs: text
            .paragraphs
            .into_iter()
            .map(|p| Paragraph {
                lines: p
                    .lines
                    .into_iter()
                    .map(|parts| Line {
                        parts: parts
                            .into_iter()
                            .map(|part| LinePart {
                                from: part.from,
                                to: part.to,
                                x: part.x,
                                y: part.y,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

impl RawStyle {
    pub fn into_style(self, node: &str) -> Result<StyleSpec, PackageError> {
        Ok(StyleSpec {
            fill: self.fill.map(|p| p.into_paint(node)).transpose()?,
            stroke: self.stroke.map(|p| p.into_paint(node)).transpose()?,
            font: self.font.map(|f| lower_font(node, f)),
        })
    }
}

impl RawPaint {
    fn into_paint(self, node: &str) -> Result<PaintSpec, PackageError> {
        let malformed = |message: &str| PackageError::MalformedNode {
            node: node.to_string(),
            message: message.to_string(),
        };

        let paint = match self.kind.as_deref() {
            Some("color") => {
                let color = self
                    .fill
                    .map(|f| f.color)
                    .or(self.color)
                    .ok_or_else(|| malformed("color paint without color"))?;
                Paint::Color(color.into_color())
            }
            Some("gradient") => Paint::GradientRef(
                self.gradient
                    .ok_or_else(|| malformed("gradient paint without reference"))?
                    .reference,
            ),
            Some("pattern") => {
                let pattern = self
                    .pattern
                    .ok_or_else(|| malformed("pattern paint without pattern"))?;
                Paint::PatternRef {
                    resource: pattern.meta.ux.uid,
                    width: pattern.width,
                    height: pattern.height,
                }
            }
            Some("none") => Paint::None,
            _ => Paint::LegacyColor(
                self.color
                    .ok_or_else(|| malformed("untagged paint without color"))?
                    .into_color(),
            ),
        };

        Ok(PaintSpec {
            paint,
            width: self.width,
        })
    }
}

fn lower_font(node: &str, font: RawFont) -> FontSpec {
    let weight = match font.style.as_deref() {
        None => FontWeight::Regular,
        Some(name) => FontWeight::from_style_name(name).unwrap_or_else(|| {
            warn!(node, style = name, "unsupported font style, using Regular");
            FontWeight::Regular
        }),
    };
    FontSpec {
        family: font.family,
        size: font.size,
        weight,
    }
}
