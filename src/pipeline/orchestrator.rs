// src/pipeline/orchestrator.rs
use super::config::InputFormat;
use super::metadata::attach_anchor_map;
use crate::error::PipelineError;
use anchormap_extract::AnchorExtractor;
use anchormap_hast::{Node, from_json, parse_xhtml, to_json_pretty, to_xhtml};
use anchormap_refs::{ReferencePanel, ReferenceText, Segment, rewrite_ref_tokens, segments};
use anchormap_types::AnchorMap;
use log::{debug, info, trace};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Result of running the anchor pass over one document.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// The input tree with reference ids assigned.
    pub tree: Node,
    /// Anchors in document order.
    pub anchors: AnchorMap,
}

impl RenderedDocument {
    /// Writes the anchor map into a metadata bag
    /// (`astro.frontmatter.anchorMap`).
    pub fn attach_to(&self, data: &mut Value) -> Result<(), PipelineError> {
        attach_anchor_map(data, self.anchors.as_slice())
    }

    /// Serializes the mutated tree in the given format.
    pub fn tree_to_string(&self, format: InputFormat) -> Result<String, PipelineError> {
        match format {
            InputFormat::HastJson => Ok(to_json_pretty(&self.tree)?),
            InputFormat::Xhtml => Ok(to_xhtml(&self.tree)),
        }
    }

    pub fn anchors_to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(&self.anchors)?)
    }
}

/// A configured anchor pass plus the reference strings its consumers use.
///
/// Holds no per-document state; every call starts from fresh counters.
#[derive(Debug, Clone)]
pub struct AnchorPipeline {
    extractor: AnchorExtractor,
    references: ReferenceText,
    debug: bool,
}

impl AnchorPipeline {
    pub(super) fn new(extractor: AnchorExtractor, references: ReferenceText, debug: bool) -> Self {
        Self {
            extractor,
            references,
            debug,
        }
    }

    /// Runs the anchor pass over an already-parsed tree.
    pub fn process(&self, mut tree: Node) -> RenderedDocument {
        let start = Instant::now();
        let anchors = self.extractor.extract_map(&mut tree);
        if self.debug {
            debug!("Tree after anchor pass:\n{:#?}", &tree);
        }
        trace!("Anchor pass took {:?}", start.elapsed());
        RenderedDocument { tree, anchors }
    }

    /// Parses `source` and runs the anchor pass.
    pub fn process_source(
        &self,
        source: &str,
        format: InputFormat,
    ) -> Result<RenderedDocument, PipelineError> {
        let parse_start = Instant::now();
        let tree = match format {
            InputFormat::HastJson => from_json(source)?,
            InputFormat::Xhtml => parse_xhtml(source)?,
        };
        trace!("Parsing {:?} input took {:?}", format, parse_start.elapsed());
        Ok(self.process(tree))
    }

    /// Loads a document from disk; the format is inferred from the extension.
    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderedDocument, PipelineError> {
        let path_ref = path.as_ref();
        let format = InputFormat::from_path(path_ref)?;
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read document from '{}': {}", path_ref.display(), e),
            ))
        })?;
        let document = self.process_source(&source, format)?;
        info!(
            "{}: {} anchors",
            path_ref.display(),
            document.anchors.len()
        );
        Ok(document)
    }

    /// Processes independent documents. Results are in input order; a failure
    /// affects only its own document.
    pub fn process_batch<P>(&self, paths: &[P]) -> Vec<Result<RenderedDocument, PipelineError>>
    where
        P: AsRef<Path> + Sync,
    {
        let start = Instant::now();
        let results = super::batch::execute_all(paths, |path| self.process_file(path));
        let failed = results.iter().filter(|r| r.is_err()).count();
        debug!(
            "Batch of {} documents finished in {:?} ({} failed)",
            paths.len(),
            start.elapsed(),
            failed
        );
        results
    }

    /// A reference panel bound to this document's anchors.
    pub fn reference_panel(&self, document: &RenderedDocument) -> ReferencePanel {
        ReferencePanel::new(document.anchors.clone()).with_text(self.references.clone())
    }

    /// Rewrites `[ref:ID]` tokens in generated text against `anchors`.
    pub fn rewrite_refs(&self, text: &str, anchors: &AnchorMap) -> String {
        rewrite_ref_tokens(text, anchors)
    }

    /// Splits generated text into plain runs and citations.
    pub fn citation_segments<'t>(&self, text: &'t str, anchors: &AnchorMap) -> Vec<Segment<'t>> {
        segments(text, anchors, &self.references)
    }

    pub fn extractor(&self) -> &AnchorExtractor {
        &self.extractor
    }

    pub fn references(&self) -> &ReferenceText {
        &self.references
    }
}
