//! In-memory representation of a rendered document.
//!
//! The shape follows hast, so trees produced by a unified/rehype pipeline can
//! be deserialized directly from their JSON form.

use crate::properties::{Properties, PropertyValue, ID};
use serde::{Deserialize, Serialize};

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// The root of a document or fragment.
    Root {
        #[serde(default)]
        children: Vec<Node>,
    },
    Element(Element),
    Text {
        value: String,
    },
    Comment {
        value: String,
    },
    Doctype,
    /// Any node type this model does not know (`raw`, `mdxJsxFlowElement`,
    /// ...). It has no text and no children, and its content is not kept.
    #[serde(other)]
    Other,
}

/// An element with a tag name, a property bag and children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn comment(value: impl Into<String>) -> Self {
        Node::Comment {
            value: value.into(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children } => children,
            Node::Element(el) => &el.children,
            _ => &[],
        }
    }

    /// Mutable children, or `None` for leaf nodes.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children } => Some(children),
            Node::Element(el) => Some(&mut el.children),
            _ => None,
        }
    }

    /// Concatenated value of every descendant text node, in document order.
    /// Comments contribute nothing.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { value } => value.clone(),
            Node::Comment { .. } | Node::Doctype | Node::Other => String::new(),
            _ => {
                let mut out = String::new();
                collect_text(self.children(), &mut out);
                out
            }
        }
    }

    /// Visits every element in pre-order.
    pub fn walk_elements<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        if let Node::Element(el) = self {
            f(el);
        }
        for child in self.children() {
            child.walk_elements(f);
        }
    }

    /// Visits every element in pre-order, mutably. A node is handed to `f`
    /// before its children are visited, so children added by `f` are walked.
    pub fn walk_elements_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        if let Node::Element(el) = self {
            f(el);
        }
        if let Some(children) = self.children_mut() {
            for child in children {
                child.walk_elements_mut(f);
            }
        }
    }

    /// First element in document order whose `id` equals `id`.
    pub fn find_element_by_id(&self, id: &str) -> Option<&Element> {
        if let Node::Element(el) = self {
            if el.id() == Some(id) {
                return Some(el);
            }
        }
        self.children()
            .iter()
            .find_map(|child| child.find_element_by_id(id))
    }

    pub fn find_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if matches!(self, Node::Element(el) if el.id() == Some(id)) {
            return self.as_element_mut();
        }
        self.children_mut()?
            .iter_mut()
            .find_map(|child| child.find_element_by_id_mut(id))
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text { value } => out.push_str(value),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Root { children } => collect_text(children, out),
            Node::Comment { .. } | Node::Doctype | Node::Other => {}
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name, value);
        self
    }

    pub fn with_class(mut self, token: &str) -> Self {
        self.properties.add_classes(&[token]);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, value: impl Into<String>) -> Self {
        self.with_child(Node::text(value))
    }

    /// The element's id, if it is a non-empty string.
    pub fn id(&self) -> Option<&str> {
        self.properties.get_str(ID).filter(|id| !id.is_empty())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.properties.insert(ID, id.into());
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.properties.has_class(token)
    }

    pub fn property_str(&self, name: &str) -> Option<&str> {
        self.properties.get_str(name)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Visits this element and every descendant element in pre-order.
    pub fn walk_elements<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        for child in &self.children {
            child.walk_elements(f);
        }
    }
}
