use crate::ids::AnchorId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The kind of content an anchor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorType {
    Heading,
    Paragraph,
    Equation,
    /// Reserved; never produced by the extractor.
    Figure,
    /// Reserved; never produced by the extractor.
    Definition,
}

impl AnchorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorType::Heading => "heading",
            AnchorType::Paragraph => "paragraph",
            AnchorType::Equation => "equation",
            AnchorType::Figure => "figure",
            AnchorType::Definition => "definition",
        }
    }
}

impl fmt::Display for AnchorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One referenceable unit of content in a rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// The `id` the anchored element carries in the rendered tree.
    pub id: AnchorId,
    /// Short human-facing description, e.g. `Đoạn 7`.
    pub label: String,
    #[serde(rename = "type")]
    pub anchor_type: AnchorType,
    /// Plain-text excerpt for hover/preview UI.
    pub preview: String,
}

/// The ordered anchor list of one document, with an id index.
///
/// Order is document (pre-order) order. Heading ids are not de-duplicated
/// upstream, so when two anchors share an id the index keeps the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Anchor>", into = "Vec<Anchor>")]
pub struct AnchorMap {
    anchors: Vec<Anchor>,
    #[serde(skip)]
    index: HashMap<AnchorId, usize>,
}

impl AnchorMap {
    pub fn new(anchors: Vec<Anchor>) -> Self {
        let mut index = HashMap::with_capacity(anchors.len());
        for (pos, anchor) in anchors.iter().enumerate() {
            index.entry(anchor.id.clone()).or_insert(pos);
        }
        Self { anchors, index }
    }

    pub fn get(&self, id: &str) -> Option<&Anchor> {
        self.position(id).map(|pos| &self.anchors[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of the first anchor with this id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The anchor following `id` in document order.
    pub fn next(&self, id: &str) -> Option<&Anchor> {
        self.position(id).and_then(|pos| self.anchors.get(pos + 1))
    }

    /// The anchor preceding `id` in document order.
    pub fn previous(&self, id: &str) -> Option<&Anchor> {
        self.position(id)
            .and_then(|pos| pos.checked_sub(1))
            .and_then(|pos| self.anchors.get(pos))
    }

    /// Ids that occur more than once, in order of their second occurrence.
    pub fn duplicate_ids(&self) -> Vec<&AnchorId> {
        let mut seen = HashMap::with_capacity(self.anchors.len());
        let mut dupes = Vec::new();
        for anchor in &self.anchors {
            let count = seen.entry(&anchor.id).or_insert(0usize);
            *count += 1;
            if *count == 2 {
                dupes.push(&anchor.id);
            }
        }
        dupes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Anchor> {
        self.anchors.iter()
    }

    pub fn as_slice(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn into_vec(self) -> Vec<Anchor> {
        self.anchors
    }
}

impl From<Vec<Anchor>> for AnchorMap {
    fn from(anchors: Vec<Anchor>) -> Self {
        Self::new(anchors)
    }
}

impl From<AnchorMap> for Vec<Anchor> {
    fn from(map: AnchorMap) -> Self {
        map.anchors
    }
}

impl<'a> IntoIterator for &'a AnchorMap {
    type Item = &'a Anchor;
    type IntoIter = std::slice::Iter<'a, Anchor>;

    fn into_iter(self) -> Self::IntoIter {
        self.anchors.iter()
    }
}
