//! The anchor pass: one pre-order traversal that assigns ids to eligible
//! elements and collects an `Anchor` for each of them.

use crate::classify::{Eligibility, classify};
use crate::config::ExtractorConfig;
use crate::math::{AnnotationMathSource, MathSource};
use crate::text::{preview, slugify, truncated_label};
use anchormap_hast::{Element, Node};
use anchormap_types::{Anchor, AnchorId, AnchorMap, AnchorType};
use log::{debug, trace, warn};
use std::collections::HashSet;
use std::sync::Arc;

pub const HEADING_ID_PREFIX: &str = "ref-h-";
pub const PARAGRAPH_ID_PREFIX: &str = "ref-p-";
pub const EQUATION_ID_PREFIX: &str = "ref-eq-";

/// Assigns reference ids and builds the anchor list of a document.
///
/// The extractor holds configuration only. Counters and the output list live
/// in a per-call traversal state, so one extractor can serve any number of
/// documents, concurrently or not.
#[derive(Debug, Clone)]
pub struct AnchorExtractor {
    config: ExtractorConfig,
    math: Arc<dyn MathSource>,
}

impl Default for AnchorExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl AnchorExtractor {
    /// Creates an extractor whose math markers come from `config.math`.
    pub fn new(config: ExtractorConfig) -> Self {
        let math = Arc::new(AnnotationMathSource::new(&config.math));
        Self { config, math }
    }

    /// Replaces the math detection/source-recovery strategy.
    pub fn with_math_source(mut self, math: Arc<dyn MathSource>) -> Self {
        self.math = math;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Runs the pass over `tree`.
    ///
    /// Eligible elements without an id get one; every eligible element with
    /// non-empty text yields exactly one anchor, in pre-order. Existing ids
    /// are never changed. Never fails: an element that cannot be anchored is
    /// skipped.
    pub fn extract(&self, tree: &mut Node) -> Vec<Anchor> {
        let mut state = Traversal::new(self);
        state.visit(tree);
        state.finish()
    }

    /// Same as [`extract`](Self::extract), indexed for lookup.
    pub fn extract_map(&self, tree: &mut Node) -> AnchorMap {
        AnchorMap::new(self.extract(tree))
    }
}

struct Traversal<'a> {
    extractor: &'a AnchorExtractor,
    paragraphs: usize,
    equations: usize,
    anchors: Vec<Anchor>,
    seen_ids: HashSet<AnchorId>,
    duplicate_ids: Vec<AnchorId>,
}

impl<'a> Traversal<'a> {
    fn new(extractor: &'a AnchorExtractor) -> Self {
        Self {
            extractor,
            paragraphs: 0,
            equations: 0,
            anchors: Vec::new(),
            seen_ids: HashSet::new(),
            duplicate_ids: Vec::new(),
        }
    }

    fn visit(&mut self, node: &mut Node) {
        if let Node::Element(element) = node {
            self.visit_element(element);
        }
        if let Some(children) = node.children_mut() {
            for child in children {
                self.visit(child);
            }
        }
    }

    fn visit_element(&mut self, element: &mut Element) {
        let Some(kind) = classify(element, self.extractor.math.as_ref()) else {
            return;
        };

        let flattened = element.text_content();
        let text = flattened.trim();
        if text.is_empty() {
            return;
        }

        let config = &self.extractor.config;
        let labels = &config.labels;
        let anchor = match kind {
            Eligibility::Heading(_) => {
                let id = ensure_id(element, || {
                    format!("{}{}", HEADING_ID_PREFIX, slugify(text, config.slug_style))
                });
                Anchor {
                    id,
                    label: truncated_label(
                        &labels.heading_prefix,
                        text,
                        config.heading_label_max_chars,
                        &labels.ellipsis,
                    ),
                    anchor_type: AnchorType::Heading,
                    preview: preview(text, config.preview_max_chars),
                }
            }
            Eligibility::Equation => {
                self.equations += 1;
                let n = self.equations;
                let id = ensure_id(element, || format!("{}{}", EQUATION_ID_PREFIX, n));
                let source = self
                    .extractor
                    .math
                    .raw_source(element)
                    .unwrap_or_else(|| labels.equation_placeholder.clone());
                Anchor {
                    id,
                    label: format!("{}{}", labels.equation_prefix, n),
                    anchor_type: AnchorType::Equation,
                    preview: preview(&source, config.preview_max_chars),
                }
            }
            Eligibility::Paragraph => {
                self.paragraphs += 1;
                let n = self.paragraphs;
                let id = ensure_id(element, || format!("{}{}", PARAGRAPH_ID_PREFIX, n));
                Anchor {
                    id,
                    label: format!("{}{}", labels.paragraph_prefix, n),
                    anchor_type: AnchorType::Paragraph,
                    preview: preview(text, config.preview_max_chars),
                }
            }
        };

        trace!("anchor {} ({}) -> {:?}", anchor.id, anchor.anchor_type, anchor.label);
        if !self.seen_ids.insert(anchor.id.clone()) {
            self.duplicate_ids.push(anchor.id.clone());
        }
        self.anchors.push(anchor);
    }

    fn finish(self) -> Vec<Anchor> {
        if !self.duplicate_ids.is_empty() {
            // Left as-is: consumers resolve a duplicated id to its first anchor.
            warn!(
                "{} anchor id(s) occur more than once in this document: {:?}",
                self.duplicate_ids.len(),
                self.duplicate_ids
            );
        }
        debug!(
            "anchor pass produced {} anchors ({} paragraphs, {} equations) using '{}' math source",
            self.anchors.len(),
            self.paragraphs,
            self.equations,
            self.extractor.math.name()
        );
        self.anchors
    }
}

/// Returns the element's existing id, or assigns the generated one.
fn ensure_id(element: &mut Element, generate: impl FnOnce() -> String) -> AnchorId {
    if let Some(existing) = element.id() {
        return AnchorId::from(existing);
    }
    let id = generate();
    element.set_id(id.as_str());
    AnchorId::from(id)
}
