//! Consumer side of the anchor map.
//!
//! Generated answers cite document content with `[ref:ID]` markers. This crate
//! turns those markers into citations bound to anchor labels, decodes the
//! resulting links, and tracks which element of the rendered document the
//! reference panel highlights. The anchor map is the single source of truth:
//! a marker whose id is not in the map stays plain text.

pub mod citation;
pub mod panel;
pub mod tokens;

pub use citation::{CITATION_HREF_PREFIX, Citation, ReferenceText};
pub use panel::{
    HIGHLIGHT_CLASSES, HIGHLIGHT_MARKER, PanelUpdate, ReferenceClick, ReferencePanel,
    clear_highlights,
};
pub use tokens::{RefToken, Segment, find_ref_tokens, rewrite_ref_tokens, segments};
