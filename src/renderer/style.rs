//! Style resolution: fill, stroke and font attributes

use crate::error::{ConvertError, ReferenceKind};
use crate::model::{FontSpec, Paint, PaintSpec, ResourceIndex, StyleSpec};

use super::color::color_to_markup;
use super::defs::{image_pattern, PatternDefs};
use super::element::Element;

/// Font size used when a font spec carries none
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Resolves style specs against the shared resources, registering
/// pattern definitions as it goes
pub struct StyleResolver<'a> {
    resources: &'a ResourceIndex,
    patterns: &'a mut PatternDefs,
}

impl<'a> StyleResolver<'a> {
    pub fn new(resources: &'a ResourceIndex, patterns: &'a mut PatternDefs) -> Self {
        Self {
            resources,
            patterns,
        }
    }

    /// Apply `style` to `target`. `owner_id` keys any pattern definition.
    pub fn resolve(
        &mut self,
        style: &StyleSpec,
        target: &mut Element,
        owner_id: &str,
    ) -> Result<(), ConvertError> {
        if let Some(stroke) = &style.stroke {
            self.resolve_paint("stroke", stroke, target, owner_id)?;
        }
        if let Some(fill) = &style.fill {
            self.resolve_paint("fill", fill, target, owner_id)?;
        }
        if let Some(font) = &style.font {
            target.set_attr("style", font_declaration(font));
        }
        Ok(())
    }

    fn resolve_paint(
        &mut self,
        property: &str,
        spec: &PaintSpec,
        target: &mut Element,
        owner_id: &str,
    ) -> Result<(), ConvertError> {
        let value = match &spec.paint {
            Paint::Color(color) | Paint::LegacyColor(color) => color_to_markup(color),
            Paint::GradientRef(id) => {
                if !self.resources.has_gradient(id) {
                    return Err(ConvertError::UnresolvedReference {
                        kind: ReferenceKind::Gradient,
                        id: id.clone(),
                        node: owner_id.to_string(),
                    });
                }
                format!("url(#{})", id)
            }
            Paint::PatternRef {
                resource,
                width,
                height,
            } => {
                let href = self.resources.data_uri(resource).ok_or_else(|| {
                    ConvertError::UnresolvedReference {
                        kind: ReferenceKind::Pattern,
                        id: resource.clone(),
                        node: owner_id.to_string(),
                    }
                })?;
                self.patterns
                    .register(image_pattern(owner_id, href, *width, *height))?;
                format!("url(#{})", owner_id)
            }
            Paint::None => "none".to_string(),
        };
        target.set_attr(property, value);

        if let Some(width) = spec.width {
            target.set_attr(&format!("{}-width", property), width);
        }
        Ok(())
    }
}

/// Font shorthand followed by the explicit longhand properties
pub fn font_declaration(font: &FontSpec) -> String {
    let weight = font.weight.numeric();
    let size = font.size.unwrap_or(DEFAULT_FONT_SIZE);
    format!(
        "font:{weight} {size}px {family};font-family:{family};font-size:{size}px;font-weight:{weight}",
        weight = weight,
        size = size,
        family = font.family
    )
}
