//! Shared gradient definitions

use indexmap::IndexMap;

use crate::model::GradientDef;

use super::color::color_to_markup;
use super::element::Element;

/// Which entries of the gradient table are emitted, and in what order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientOrder {
    /// Every gradient, in table order
    #[default]
    All,
    /// Last entry down to the second one; the first entry is never emitted.
    /// Reproduces the output of the legacy converter byte for byte.
    Legacy,
}

/// Build one gradient element per table entry
pub fn build_gradient_defs(
    gradients: &IndexMap<String, GradientDef>,
    order: GradientOrder,
) -> Vec<Element> {
    let entries: Vec<(&String, &GradientDef)> = match order {
        GradientOrder::All => gradients.iter().collect(),
        GradientOrder::Legacy => gradients.iter().skip(1).rev().collect(),
    };

    entries
        .into_iter()
        .map(|(id, gradient)| gradient_element(id, gradient))
        .collect()
}

fn gradient_element(id: &str, gradient: &GradientDef) -> Element {
    let mut element = Element::new(gradient.kind.tag()).with_attr("id", id);
    for stop in &gradient.stops {
        element.append(
            Element::new("stop")
                .with_attr("offset", stop.offset)
                .with_attr("stop-color", color_to_markup(&stop.color)),
        );
    }
    element
}
