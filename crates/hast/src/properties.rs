//! The property bag carried by every element.
//!
//! Mirrors the hast convention: `className` is a list of class tokens and all
//! other properties are scalars keyed by their (camelCase) property name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the class-list property.
pub const CLASS_NAME: &str = "className";
/// Name of the id property.
pub const ID: &str = "id";

/// A single property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<String>),
    /// A list holding numbers, e.g. `coords`.
    MixedList(Vec<ListItem>),
}

/// One entry of a list property that is not all strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    String(String),
    Number(f64),
}

impl std::fmt::Display for ListItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListItem::String(s) => f.write_str(s),
            ListItem::Number(n) => write!(f, "{}", n),
        }
    }
}

impl PropertyValue {
    /// Returns the value when it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value the way it would appear in an attribute.
    /// Returns `None` for values that produce no attribute (`false`, `null`).
    pub fn to_attribute_value(&self) -> Option<String> {
        match self {
            PropertyValue::Null | PropertyValue::Bool(false) => None,
            PropertyValue::Bool(true) => Some(String::new()),
            PropertyValue::Number(n) => Some(n.to_string()),
            PropertyValue::String(s) => Some(s.clone()),
            PropertyValue::List(items) => Some(items.join(" ")),
            PropertyValue::MixedList(items) => Some(
                items
                    .iter()
                    .map(ListItem::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(items: Vec<String>) -> Self {
        PropertyValue::List(items)
    }
}

/// Insertion-ordered map of property name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(IndexMap<String, PropertyValue>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropertyValue::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.0.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Class tokens, accepting both the list form and a whitespace-separated
    /// string.
    pub fn class_list(&self) -> Vec<&str> {
        match self.get(CLASS_NAME) {
            Some(PropertyValue::List(items)) => items.iter().map(String::as_str).collect(),
            Some(PropertyValue::String(s)) => s.split_whitespace().collect(),
            _ => Vec::new(),
        }
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.class_list().contains(&token)
    }

    /// Appends the tokens not already present. A string-form `className` is
    /// normalised to the list form.
    pub fn add_classes(&mut self, tokens: &[&str]) {
        let mut list: Vec<String> = self.class_list().into_iter().map(str::to_string).collect();
        for token in tokens {
            if !list.iter().any(|existing| existing.as_str() == *token) {
                list.push((*token).to_string());
            }
        }
        self.0.insert(CLASS_NAME.to_string(), PropertyValue::List(list));
    }

    /// Removes the given tokens. Returns `true` when anything was removed.
    pub fn remove_classes(&mut self, tokens: &[&str]) -> bool {
        let current = self.class_list();
        if !current.iter().any(|c| tokens.contains(c)) {
            return false;
        }
        let kept: Vec<String> = current
            .into_iter()
            .filter(|c| !tokens.contains(c))
            .map(str::to_string)
            .collect();
        self.0.insert(CLASS_NAME.to_string(), PropertyValue::List(kept));
        true
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
