//! Transform attribute generation
//!
//! Only translation is supported. Matrix components other than the
//! translation never reach the model.

use crate::model::TransformSpec;

use super::element::Element;

/// Format a transform as a `transform` attribute value
pub fn transform_attr(transform: &TransformSpec) -> String {
    format!("translate({} {})", transform.tx, transform.ty)
}

/// Set the `transform` attribute on an element
pub fn apply_transform(element: &mut Element, transform: &TransformSpec) {
    element.set_attr("transform", transform_attr(transform));
}
