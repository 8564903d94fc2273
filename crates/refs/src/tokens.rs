//! Inline `[ref:ID]` markers in generated text.

use crate::citation::{CITATION_HREF_PREFIX, Citation, ReferenceText};
use anchormap_types::AnchorMap;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static REF_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[ref:([a-z0-9_-]+)\]").expect("BUG: invalid REF_TOKEN regex literal")
});

/// One `[ref:ID]` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefToken<'t> {
    pub id: &'t str,
    /// Byte range of the whole token in the source text.
    pub span: Range<usize>,
}

/// A piece of generated text after reference resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Plain text, including unresolvable tokens kept verbatim.
    Text(&'t str),
    Citation(Citation),
}

/// Every `[ref:ID]` token in `text`, in order.
pub fn find_ref_tokens(text: &str) -> Vec<RefToken<'_>> {
    REF_TOKEN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let id = caps.get(1)?;
            Some(RefToken {
                id: id.as_str(),
                span: whole.range(),
            })
        })
        .collect()
}

/// Rewrites tokens naming a known anchor into markdown links
/// `[<label>](#ref-<id>)`. Tokens naming unknown ids stay as they are, so
/// they render as inert text.
pub fn rewrite_ref_tokens(text: &str, anchors: &AnchorMap) -> String {
    REF_TOKEN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            match anchors.get(&caps[1]) {
                Some(anchor) => format!("[{}]({}{})", anchor.label, CITATION_HREF_PREFIX, anchor.id),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Splits `text` into plain runs and citations. Adjacent plain runs are not
/// merged, so an unknown token is its own `Text` segment.
pub fn segments<'t>(text: &'t str, anchors: &AnchorMap, labels: &ReferenceText) -> Vec<Segment<'t>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for token in find_ref_tokens(text) {
        if token.span.start > cursor {
            out.push(Segment::Text(&text[cursor..token.span.start]));
        }
        match Citation::for_id(token.id, anchors, labels) {
            Some(citation) => out.push(Segment::Citation(citation)),
            None => out.push(Segment::Text(&text[token.span.clone()])),
        }
        cursor = token.span.end;
    }
    if cursor < text.len() {
        out.push(Segment::Text(&text[cursor..]));
    }
    out
}
