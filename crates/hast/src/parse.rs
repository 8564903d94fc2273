//! Loading trees from markup and from hast JSON.

use crate::error::HastError;
use crate::node::{Element, Node};
use crate::properties::{CLASS_NAME, Properties, PropertyValue};
use log::trace;

/// Synthetic wrapper used to parse fragments with several top-level nodes.
const FRAGMENT_ROOT: &str = "anchormap-fragment";

/// Parses well-formed XHTML (a full document or a fragment) into a `Root`.
///
/// Input starting with an XML declaration or a doctype is parsed as a
/// document; anything else is treated as a fragment and may contain several
/// top-level elements.
pub fn parse_xhtml(source: &str) -> Result<Node, HastError> {
    let trimmed = source.trim_start();
    let is_document = trimmed.starts_with("<?xml")
        || trimmed
            .get(..9)
            .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"));
    if is_document {
        parse_xhtml_document(source)
    } else {
        parse_xhtml_fragment(source)
    }
}

pub fn parse_xhtml_document(source: &str) -> Result<Node, HastError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(source, options)?;
    let mut children = Vec::new();
    if has_doctype(source) {
        children.push(Node::Doctype);
    }
    children.extend(doc.root().children().filter_map(convert));
    Ok(Node::root(children))
}

pub fn parse_xhtml_fragment(source: &str) -> Result<Node, HastError> {
    let wrapped = format!("<{FRAGMENT_ROOT}>{source}</{FRAGMENT_ROOT}>");
    let doc = roxmltree::Document::parse(&wrapped)?;
    let children = doc
        .root_element()
        .children()
        .filter_map(convert)
        .collect();
    Ok(Node::root(children))
}

/// Deserializes a hast JSON tree. A bare element is wrapped in a `Root`.
pub fn from_json(source: &str) -> Result<Node, HastError> {
    let node: Node = serde_json::from_str(source)?;
    match node {
        Node::Root { .. } => Ok(node),
        Node::Element(_) => Ok(Node::root(vec![node])),
        Node::Text { .. } => Err(HastError::UnexpectedTopLevel("text")),
        Node::Comment { .. } => Err(HastError::UnexpectedTopLevel("comment")),
        Node::Doctype => Err(HastError::UnexpectedTopLevel("doctype")),
        Node::Other => Err(HastError::UnexpectedTopLevel("unknown node")),
    }
}

fn has_doctype(source: &str) -> bool {
    let head: String = source.chars().take(512).collect();
    head.to_ascii_lowercase().contains("<!doctype")
}

fn convert(node: roxmltree::Node<'_, '_>) -> Option<Node> {
    match node.node_type() {
        roxmltree::NodeType::Element => Some(Node::Element(convert_element(node))),
        roxmltree::NodeType::Text => node.text().map(Node::text),
        roxmltree::NodeType::Comment => node.text().map(Node::comment),
        roxmltree::NodeType::PI | roxmltree::NodeType::Root => None,
    }
}

fn convert_element(node: roxmltree::Node<'_, '_>) -> Element {
    let mut properties = Properties::new();
    for attr in node.attributes() {
        if attr.name() == "class" {
            let tokens: Vec<String> = attr.value().split_whitespace().map(str::to_string).collect();
            properties.insert(CLASS_NAME, PropertyValue::List(tokens));
        } else {
            properties.insert(attr.name(), attr.value());
        }
    }
    let tag_name = node.tag_name().name().to_string();
    trace!("parsed <{}> with {} attributes", tag_name, node.attributes().count());
    Element {
        tag_name,
        properties,
        children: node.children().filter_map(convert).collect(),
    }
}
