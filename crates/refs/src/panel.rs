//! Reference panel state: which anchor is active and which element in the
//! rendered document is highlighted.

use crate::citation::ReferenceText;
use anchormap_hast::Node;
use anchormap_types::{Anchor, AnchorId, AnchorMap};
use log::debug;
use serde::{Deserialize, Serialize};

/// Marker class identifying highlighted elements.
pub const HIGHLIGHT_MARKER: &str = "reference-highlight";

/// Classes applied to the highlighted element (marker first).
pub const HIGHLIGHT_CLASSES: &[&str] = &[
    HIGHLIGHT_MARKER,
    "bg-primary/20",
    "ring-2",
    "ring-primary",
    "transition-all",
    "duration-500",
    "rounded",
    "p-1",
    "-m-1",
];

/// Navigation signal emitted when a citation is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceClick {
    pub id: String,
}

impl ReferenceClick {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Outcome of handling a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelUpdate {
    /// The element bearing the id is now the only highlighted one.
    Highlighted(AnchorId),
    /// The id became active but no element carries it; prior highlights
    /// were still cleared.
    TargetMissing(AnchorId),
    /// The click carried no id and changed nothing.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ReferencePanel {
    anchors: AnchorMap,
    text: ReferenceText,
    active: Option<AnchorId>,
}

impl ReferencePanel {
    pub fn new(anchors: AnchorMap) -> Self {
        Self {
            anchors,
            text: ReferenceText::default(),
            active: None,
        }
    }

    pub fn with_text(mut self, text: ReferenceText) -> Self {
        self.text = text;
        self
    }

    /// Makes `click.id` active: clears every existing highlight in `tree`,
    /// then highlights the element carrying that id.
    pub fn handle(&mut self, click: &ReferenceClick, tree: &mut Node) -> PanelUpdate {
        if click.id.is_empty() {
            return PanelUpdate::Ignored;
        }
        let id = AnchorId::new(click.id.as_str());
        self.active = Some(id.clone());

        let cleared = clear_highlights(tree);
        debug!("reference click on '{}' cleared {} highlight(s)", id, cleared);

        match tree.find_element_by_id_mut(id.as_str()) {
            Some(target) => {
                target.properties.add_classes(HIGHLIGHT_CLASSES);
                PanelUpdate::Highlighted(id)
            }
            None => PanelUpdate::TargetMissing(id),
        }
    }

    pub fn active_id(&self) -> Option<&AnchorId> {
        self.active.as_ref()
    }

    pub fn active_anchor(&self) -> Option<&Anchor> {
        self.active.as_ref().and_then(|id| self.anchors.get(id.as_str()))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_ref().is_some_and(|active| active == id)
    }

    /// Title shown above the panel: the active anchor's label, or the default
    /// title when nothing known is active.
    pub fn title(&self) -> &str {
        self.active_anchor()
            .map(|anchor| anchor.label.as_str())
            .unwrap_or(self.text.panel_default_title.as_str())
    }

    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }
}

/// Removes the highlight classes from every element carrying the marker.
/// Returns the number of elements touched.
pub fn clear_highlights(tree: &mut Node) -> usize {
    let mut cleared = 0;
    tree.walk_elements_mut(&mut |el| {
        if el.has_class(HIGHLIGHT_MARKER) {
            el.properties.remove_classes(HIGHLIGHT_CLASSES);
            cleared += 1;
        }
    });
    cleared
}
