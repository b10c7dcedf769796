//! SVG generation from the document model
//!
//! Artboards are walked into an owned element tree; gradients and patterns
//! go into one shared `<defs>` block per batch.

pub mod color;
pub mod config;
pub mod defs;
pub mod document;
pub mod element;
pub mod gradient;
pub mod style;
pub mod text;
pub mod transform;
pub mod walker;

pub use config::SvgConfig;
pub use defs::{shared_defs, PatternDefs};
pub use document::{convert_artboard, ConvertedArtboard};
pub use element::{Element, Node};
pub use gradient::{build_gradient_defs, GradientOrder};
pub use style::StyleResolver;
pub use walker::SceneWalker;
