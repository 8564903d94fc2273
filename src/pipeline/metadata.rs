//! Boundary adapter between the anchor list and a document's metadata bag.
//!
//! Page templates read the anchor map from
//! `data.astro.frontmatter.anchorMap`, so that is where it is written.

use crate::error::PipelineError;
use anchormap_types::{Anchor, AnchorMap};
use serde_json::{Map, Value};

pub const ANCHOR_MAP_KEY: &str = "anchorMap";
const PATH: [&str; 2] = ["astro", "frontmatter"];

/// Writes `anchors` to `data.astro.frontmatter.anchorMap`.
///
/// Missing intermediate objects are created, and any non-object value on the
/// path (including `data` itself) is replaced by an object. An existing
/// anchor map is overwritten; other frontmatter keys are kept.
pub fn attach_anchor_map(data: &mut Value, anchors: &[Anchor]) -> Result<(), PipelineError> {
    let serialized = serde_json::to_value(anchors)?;
    let mut cursor = data;
    for key in PATH {
        let object = ensure_object(cursor);
        cursor = object
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(cursor).insert(ANCHOR_MAP_KEY.to_string(), serialized);
    Ok(())
}

/// Reads the anchor map back, for template code holding only the metadata.
/// Returns `None` when it is absent or not a valid anchor list.
pub fn read_anchor_map(data: &Value) -> Option<AnchorMap> {
    let mut cursor = data;
    for key in PATH {
        cursor = cursor.get(key)?;
    }
    let list = cursor.get(ANCHOR_MAP_KEY)?;
    serde_json::from_value::<Vec<Anchor>>(list.clone())
        .ok()
        .map(AnchorMap::new)
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just replaced by an object"),
    }
}
