//! Text elements from precomputed line layout
//!
//! Layout is taken as given: one `<tspan>` per line part, positioned at the
//! part's coordinates. Nothing is measured or re-wrapped.

use crate::error::ConvertError;
use crate::model::TextNode;

use super::element::Element;

/// Build a `<text>` element with one `<tspan>` per line part, in
/// paragraph, line, part order
pub fn build_text(node_id: &str, text: &TextNode) -> Result<Element, ConvertError> {
    // Byte offset of every char boundary, including the end of the string
    let boundaries: Vec<usize> = text
        .raw_text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.raw_text.len()))
        .collect();
    let len = boundaries.len() - 1;

    let mut element = Element::new("text");
    let parts = text
        .paragraphs
        .iter()
        .flat_map(|p| &p.lines)
        .flat_map(|l| &l.parts);

    for part in parts {
        if part.from > part.to || part.to > len {
            return Err(ConvertError::InvalidRange {
                node: node_id.to_string(),
                from: part.from,
                to: part.to,
                len,
            });
        }

        let mut span = Element::new("tspan")
            .with_attr("x", part.x.unwrap_or(0.0))
            .with_attr("y", part.y.unwrap_or(0.0));
        span.append_text(&text.raw_text[boundaries[part.from]..boundaries[part.to]]);
        element.append(span);
    }

    Ok(element)
}
