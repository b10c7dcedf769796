//! Scene graph to markup element conversion

use crate::error::ConvertError;
use crate::model::{NodeKind, SceneNode, Shape};

use super::element::Element;
use super::style::StyleResolver;
use super::text::build_text;
use super::transform::apply_transform;

/// Walks scene nodes depth first, appending one element per node
pub struct SceneWalker<'r, 'a> {
    resolver: &'r mut StyleResolver<'a>,
}

impl<'r, 'a> SceneWalker<'r, 'a> {
    pub fn new(resolver: &'r mut StyleResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Convert `nodes` in document order and append them to `parent`
    pub fn walk(&mut self, nodes: &[SceneNode], parent: &mut Element) -> Result<(), ConvertError> {
        for node in nodes {
            let element = self.node_element(node)?;
            parent.append(element);
        }
        Ok(())
    }

    fn node_element(&mut self, node: &SceneNode) -> Result<Element, ConvertError> {
        // Geometry and children first, so style and transform land on the typed element
        let mut element = match &node.kind {
            NodeKind::Shape(shape) => shape_element(shape),
            NodeKind::Text(text) => build_text(&node.id, text)?,
            NodeKind::Group(children) => {
                let mut group = Element::new("g");
                self.walk(children, &mut group)?;
                group
            }
        };

        if let Some(style) = &node.style {
            self.resolver.resolve(style, &mut element, &node.id)?;
        }
        if let Some(transform) = &node.transform {
            apply_transform(&mut element, transform);
        }
        Ok(element)
    }
}

/// Build the geometry element for a shape
pub fn shape_element(shape: &Shape) -> Element {
    let element = Element::new(shape.tag());
    match shape {
        Shape::Path { d } => element.with_attr("d", d),
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => element
            .with_attr("x", x)
            .with_attr("y", y)
            .with_attr("width", width)
            .with_attr("height", height),
        Shape::Circle { cx, cy, r } => element
            .with_attr("cx", cx)
            .with_attr("cy", cy)
            .with_attr("r", r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Color, Line, LinePart, Paint, Paragraph, ResourceIndex, StyleSpec, TextNode,
        TransformSpec,
    };
    use crate::renderer::defs::PatternDefs;

    fn rect(id: &str, x: f64) -> SceneNode {
        SceneNode::new(
            id,
            NodeKind::Shape(Shape::Rect {
                x,
                y: 0.0,
                width: 5.0,
                height: 5.0,
            }),
        )
    }

    fn walk(nodes: &[SceneNode]) -> Result<(Element, PatternDefs), ConvertError> {
        let resources = ResourceIndex::new().with_data_uri("img", "data:image/png;base64,AA==");
        let mut patterns = PatternDefs::new();
        let mut root = Element::new("svg");
        {
            let mut resolver = StyleResolver::new(&resources, &mut patterns);
            SceneWalker::new(&mut resolver).walk(nodes, &mut root)?;
        }
        Ok((root, patterns))
    }

    fn attr_names(el: &Element) -> Vec<&str> {
        el.attributes().map(|(n, _)| n).collect()
    }

    #[test]
    fn test_shape_attribute_sets() {
        let path = shape_element(&Shape::Path { d: "M0 0L1 1".into() });
        assert_eq!(attr_names(&path), vec!["d"]);

        let rect = shape_element(&Shape::Rect {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
        });
        assert_eq!(attr_names(&rect), vec!["x", "y", "width", "height"]);

        let circle = shape_element(&Shape::Circle {
            cx: 1.0,
            cy: 2.0,
            r: 3.0,
        });
        assert_eq!(circle.name, "circle");
        assert_eq!(attr_names(&circle), vec!["cx", "cy", "r"]);
    }

    #[test]
    fn test_group_children_in_order() {
        let group = SceneNode::new("g1", NodeKind::Group(vec![rect("a", 1.0), rect("b", 2.0)]))
            .with_style(StyleSpec {
                fill: Some(Paint::None.into()),
                ..Default::default()
            })
            .with_transform(TransformSpec::translate(3.0, 4.0));

        let (root, _) = walk(&[group]).unwrap();
        let g = root.elements().next().unwrap();
        assert_eq!(g.name, "g");
        assert_eq!(g.attr("fill"), Some("none"));
        assert_eq!(g.attr("transform"), Some("translate(3 4)"));

        let xs: Vec<_> = g.elements().map(|c| c.attr("x").unwrap()).collect();
        assert_eq!(xs, vec!["1", "2"]);
    }

    #[test]
    fn test_nested_groups() {
        let inner = SceneNode::new("inner", NodeKind::Group(vec![rect("a", 0.0)]));
        let outer = SceneNode::new("outer", NodeKind::Group(vec![inner, rect("b", 1.0)]));

        let (root, _) = walk(&[outer]).unwrap();
        let outer = root.elements().next().unwrap();
        let children: Vec<_> = outer.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(children, vec!["g", "rect"]);
        assert_eq!(outer.elements().next().unwrap().elements().count(), 1);
    }

    #[test]
    fn test_style_keeps_geometry() {
        let node = rect("a", 7.0).with_style(StyleSpec {
            fill: Some(Paint::Color(Color::rgb(255.0, 0.0, 0.0)).into()),
            ..Default::default()
        });
        let (root, _) = walk(&[node]).unwrap();
        let el = root.elements().next().unwrap();
        assert_eq!(attr_names(el), vec!["x", "y", "width", "height", "fill"]);
        assert_eq!(el.attr("x"), Some("7"));
    }

    #[test]
    fn test_pattern_keyed_by_node_id() {
        let node = rect("shape-9", 0.0).with_style(StyleSpec {
            fill: Some(
                Paint::PatternRef {
                    resource: "img".into(),
                    width: 8.0,
                    height: 6.0,
                }
                .into(),
            ),
            ..Default::default()
        });
        let (root, patterns) = walk(&[node]).unwrap();
        assert_eq!(root.elements().next().unwrap().attr("fill"), Some("url(#shape-9)"));
        assert!(patterns.get("shape-9").is_some());
    }

    #[test]
    fn test_text_node() {
        let text = TextNode {
            raw_text: "Hi there".into(),
            paragraphs: vec![Paragraph {
                lines: vec![Line {
                    parts: vec![LinePart {
                        from: 0,
                        to: 2,
                        x: Some(1.0),
                        y: Some(12.0),
                    }],
                }],
            }],
        };
        let (root, _) = walk(&[SceneNode::new("t", NodeKind::Text(text))]).unwrap();
        let el = root.elements().next().unwrap();
        assert_eq!(el.name, "text");
        let span = el.elements().next().unwrap();
        assert_eq!(span.text(), "Hi");
        assert_eq!(span.attr("y"), Some("12"));
    }

    #[test]
    fn test_error_inside_group_aborts() {
        let bad = rect("bad", 0.0).with_style(StyleSpec {
            stroke: Some(Paint::GradientRef("missing".into()).into()),
            ..Default::default()
        });
        let group = SceneNode::new("g", NodeKind::Group(vec![rect("ok", 0.0), bad]));
        assert!(matches!(
            walk(&[group]),
            Err(ConvertError::UnresolvedReference { .. })
        ));
    }
}
