//! Writing trees back out after the anchor pass has mutated them.

use crate::error::HastError;
use crate::node::{Element, Node};
use crate::properties::CLASS_NAME;
use quick_xml::escape::escape;

/// HTML elements that never have content and are written self-closing.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub fn to_json(node: &Node) -> Result<String, HastError> {
    Ok(serde_json::to_string(node)?)
}

pub fn to_json_pretty(node: &Node) -> Result<String, HastError> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Serializes the tree as XHTML. Text and attribute values are escaped.
pub fn to_xhtml(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Root { children } => children.iter().for_each(|c| write_node(c, out)),
        Node::Element(el) => write_element(el, out),
        Node::Text { value } => out.push_str(&escape(value.as_str())),
        Node::Comment { value } => {
            out.push_str("<!--");
            out.push_str(value);
            out.push_str("-->");
        }
        Node::Doctype => out.push_str("<!DOCTYPE html>"),
        Node::Other => {}
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag_name);
    for (name, value) in el.properties.iter() {
        let Some(rendered) = value.to_attribute_value() else {
            continue;
        };
        let attr_name = if name == CLASS_NAME { "class" } else { name };
        if name == CLASS_NAME && rendered.is_empty() {
            continue;
        }
        out.push(' ');
        out.push_str(attr_name);
        out.push_str("=\"");
        out.push_str(&escape(rendered.as_str()));
        out.push('"');
    }

    if el.children.is_empty() && VOID_ELEMENTS.contains(&el.tag_name.as_str()) {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &el.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag_name);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_xhtml;

    #[test]
    fn writes_ids_classes_and_escapes_text() {
        let tree = Node::root(vec![
            Element::new("p")
                .with_property("id", "ref-p-1")
                .with_class("lead")
                .with_text("a < b & c")
                .into(),
            Element::new("br").into(),
        ]);
        assert_eq!(
            to_xhtml(&tree),
            r#"<p id="ref-p-1" class="lead">a &lt; b &amp; c</p><br/>"#
        );
    }

    #[test]
    fn xhtml_output_parses_back_to_the_same_text() {
        let src = r#"<h2 id="x">Tiêu đề</h2><p>Một &amp; hai</p>"#;
        let tree = parse_xhtml(src).unwrap();
        let again = parse_xhtml(&to_xhtml(&tree)).unwrap();
        assert_eq!(tree, again);
    }

    #[test]
    fn false_and_null_properties_are_omitted() {
        let el = Element::new("input")
            .with_property("disabled", false)
            .with_property("checked", true);
        assert_eq!(to_xhtml(&Node::from(el)), r#"<input checked=""/>"#);
    }
}
