//! Typed document model consumed by the renderer
//!
//! Everything here is built once by the package loader and read-only
//! afterwards. Scene nodes own their children by value, so a scene is
//! always a tree.

use std::collections::HashMap;

use indexmap::IndexMap;

/// Axis-aligned bounds of an artboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Optional output size overriding the bounds on the root element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// One artboard, converted into one output document
#[derive(Debug, Clone, PartialEq)]
pub struct ArtboardDescriptor {
    pub id: String,
    pub name: String,
    pub bounds: Bounds,
    pub viewport: Viewport,
    /// Style of the background rectangle
    pub style: Option<StyleSpec>,
    pub children: Vec<SceneNode>,
}

/// A node of the artwork tree
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Unique across the whole conversion run; doubles as pattern id
    pub id: String,
    pub style: Option<StyleSpec>,
    pub transform: Option<TransformSpec>,
    pub kind: NodeKind,
}

impl SceneNode {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            style: None,
            transform: None,
            kind,
        }
    }

    pub fn with_style(mut self, style: StyleSpec) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_transform(mut self, transform: TransformSpec) -> Self {
        self.transform = Some(transform);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Shape(Shape),
    Text(TextNode),
    Group(Vec<SceneNode>),
}

/// Geometry of a shape node
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path {
        d: String,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
}

impl Shape {
    /// Markup element name for this shape
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Path { .. } => "path",
            Shape::Rect { .. } => "rect",
            Shape::Circle { .. } => "circle",
        }
    }
}

/// Text with precomputed layout
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextNode {
    pub raw_text: String,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub parts: Vec<LinePart>,
}

/// A run of `raw_text`, addressed by character offsets `[from, to)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinePart {
    pub from: usize,
    pub to: usize,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Translation only; rotation, scale and skew are not modeled
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformSpec {
    pub tx: f64,
    pub ty: f64,
}

impl TransformSpec {
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self { tx, ty }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSpec {
    pub fill: Option<PaintSpec>,
    pub stroke: Option<PaintSpec>,
    pub font: Option<FontSpec>,
}

/// A fill or stroke paint, with an optional `<property>-width`
#[derive(Debug, Clone, PartialEq)]
pub struct PaintSpec {
    pub paint: Paint,
    pub width: Option<f64>,
}

impl From<Paint> for PaintSpec {
    fn from(paint: Paint) -> Self {
        Self { paint, width: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Color(Color),
    GradientRef(String),
    PatternRef {
        resource: String,
        width: f64,
        height: f64,
    },
    None,
    /// Untagged paint from older packages; the payload is a bare color
    LegacyColor(Color),
}

/// RGB color with optional alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub alpha: Option<f64>,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: Option<f64>,
    pub weight: FontWeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
    Black,
}

impl FontWeight {
    /// Parse a package style name such as `"SemiBold"`
    pub fn from_style_name(name: &str) -> Option<Self> {
        match name {
            "Light" => Some(FontWeight::Light),
            "Regular" => Some(FontWeight::Regular),
            "Medium" => Some(FontWeight::Medium),
            "SemiBold" => Some(FontWeight::SemiBold),
            "Bold" => Some(FontWeight::Bold),
            "Black" => Some(FontWeight::Black),
            _ => None,
        }
    }

    /// Numeric CSS weight
    pub fn numeric(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Radial,
}

impl GradientKind {
    pub fn tag(self) -> &'static str {
        match self {
            GradientKind::Linear => "linearGradient",
            GradientKind::Radial => "radialGradient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientDef {
    pub kind: GradientKind,
    /// Emitted in this order, never re-sorted by offset
    pub stops: Vec<GradientStop>,
}

/// Shared resources referenced from style specs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceIndex {
    /// Resource key -> `data:<mime>;base64,<payload>`
    pub data_uris: HashMap<String, String>,
    /// Gradient id -> definition, in package order
    pub gradients: IndexMap<String, GradientDef>,
}

impl ResourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_uri(mut self, key: impl Into<String>, uri: impl Into<String>) -> Self {
        self.data_uris.insert(key.into(), uri.into());
        self
    }

    pub fn with_gradient(mut self, id: impl Into<String>, gradient: GradientDef) -> Self {
        self.gradients.insert(id.into(), gradient);
        self
    }

    pub fn data_uri(&self, key: &str) -> Option<&str> {
        self.data_uris.get(key).map(String::as_str)
    }

    pub fn has_gradient(&self, id: &str) -> bool {
        self.gradients.contains_key(id)
    }
}
