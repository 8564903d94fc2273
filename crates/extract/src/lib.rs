//! Anchor extraction for rendered lesson documents.
//!
//! Walks a document tree once, gives headings, paragraphs and display
//! equations a stable `id`, and returns one [`Anchor`] per anchored element in
//! document order. The anchor list is what an assistant client uses to turn
//! `[ref:ID]` markers into citations.
//!
//! ```ignore
//! let mut tree = anchormap_hast::parse_xhtml("<h2>Giới thiệu</h2><p>...</p>")?;
//! let anchors = anchormap_extract::extract_anchors(&mut tree);
//! assert_eq!(anchors[0].id, "ref-h-gioi-thieu");
//! ```

pub mod classify;
pub mod config;
pub mod extractor;
pub mod math;
pub mod text;

pub use classify::{Eligibility, classify};
pub use config::{ExtractorConfig, Labels, MathConfig, SlugStyle};
pub use extractor::{
    AnchorExtractor, EQUATION_ID_PREFIX, HEADING_ID_PREFIX, PARAGRAPH_ID_PREFIX,
};
pub use math::{AnnotationMathSource, MathSource};
pub use text::slugify;

use anchormap_hast::Node;
use anchormap_types::Anchor;

/// Runs the anchor pass with the default configuration.
pub fn extract_anchors(tree: &mut Node) -> Vec<Anchor> {
    AnchorExtractor::default().extract(tree)
}
