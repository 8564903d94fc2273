use anchormap_types::{AnchorId, AnchorMap};
use serde::{Deserialize, Serialize};

/// Fragment prefix of a rewritten reference link (`#ref-<anchor id>`).
pub const CITATION_HREF_PREFIX: &str = "#ref-";

/// User-facing strings of the reference UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceText {
    /// Prefix of a citation's tooltip; the anchor label follows.
    pub citation_title_prefix: String,
    /// Panel title when no known anchor is active.
    pub panel_default_title: String,
}

impl Default for ReferenceText {
    fn default() -> Self {
        Self {
            citation_title_prefix: "Nhấp để xem tham chiếu: ".to_string(),
            panel_default_title: "Tham chiếu nội dung".to_string(),
        }
    }
}

/// A clickable reference to one anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: AnchorId,
    pub label: String,
    /// Tooltip text.
    pub title: String,
}

impl Citation {
    /// Builds the citation for `id`, or `None` when the map has no such
    /// anchor.
    pub fn for_id(id: &str, anchors: &AnchorMap, text: &ReferenceText) -> Option<Self> {
        let anchor = anchors.get(id)?;
        Some(Self {
            id: anchor.id.clone(),
            label: anchor.label.clone(),
            title: format!("{}{}", text.citation_title_prefix, anchor.label),
        })
    }

    /// Decodes a `#ref-<id>` link target. Other links, and links to ids the
    /// map does not know, yield `None`.
    pub fn from_href(href: &str, anchors: &AnchorMap, text: &ReferenceText) -> Option<Self> {
        let id = href.strip_prefix(CITATION_HREF_PREFIX)?;
        Self::for_id(id, anchors, text)
    }

    /// The link target that `from_href` decodes back to this citation.
    pub fn href(&self) -> String {
        format!("{}{}", CITATION_HREF_PREFIX, self.id)
    }
}
