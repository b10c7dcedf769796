//! Owned markup element tree and its serializer

use super::SvgConfig;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// A child of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A markup element with insertion-ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
            children: vec![],
        }
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attr(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Builder form of [`Element::set_attr`]
    pub fn with_attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Child elements, skipping text nodes
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text content of the direct text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Serialize this element and its subtree
    pub fn to_markup(&self, config: &SvgConfig) -> String {
        let mut out = String::new();
        self.write(&mut out, 0, config.pretty_print);
        out
    }

    fn write(&self, out: &mut String, depth: usize, pretty: bool) {
        if pretty {
            out.push_str(&"  ".repeat(depth));
        }
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push_str(&format!(r#" {}="{}""#, name, escape_xml(value)));
        }

        if self.children.is_empty() {
            out.push_str("/>");
        } else if !pretty || self.is_inline() {
            out.push('>');
            for child in &self.children {
                match child {
                    Node::Element(e) => e.write(out, 0, false),
                    Node::Text(t) => out.push_str(&escape_xml(t)),
                }
            }
            self.close(out);
        } else {
            out.push_str(">\n");
            for child in self.elements() {
                child.write(out, depth + 1, true);
            }
            out.push_str(&"  ".repeat(depth));
            self.close(out);
        }

        if pretty {
            out.push('\n');
        }
    }

    fn close(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    // Whitespace inside text content is significant
    fn is_inline(&self) -> bool {
        self.name == "text" || self.children.iter().any(|c| matches!(c, Node::Text(_)))
    }
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
