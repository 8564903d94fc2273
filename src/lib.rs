//! Anchor maps for rendered lesson documents.
//!
//! The anchor pass walks a rendered HTML tree, gives every heading, paragraph
//! and display equation a stable `ref-*` id, and returns an ordered list of
//! anchors with human-readable labels and short previews. Generated text can
//! then cite those anchors with `[ref:ID]` tokens, which resolve to links and
//! to a highlighted target in the reference panel.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{
    ANCHOR_MAP_KEY, AnchorMapConfig, AnchorPipeline, AnchorPipelineBuilder, InputFormat,
    RenderedDocument, attach_anchor_map, read_anchor_map,
};

pub use anchormap_extract as extract;
pub use anchormap_hast as hast;
pub use anchormap_refs as refs;
pub use anchormap_types as types;

pub use anchormap_extract::{AnchorExtractor, ExtractorConfig, extract_anchors};
pub use anchormap_types::{Anchor, AnchorId, AnchorMap, AnchorType};
