//! Generic document tree (hast-shaped) consumed by the anchor-map passes.
//!
//! Element nodes carry a tag name, a property map and children; text nodes
//! carry raw text. Trees can be loaded from hast JSON or well-formed XHTML and
//! written back to either form.

pub mod error;
pub mod node;
pub mod parse;
pub mod properties;
pub mod serialize;

pub use error::HastError;
pub use node::{Element, Node};
pub use parse::{from_json, parse_xhtml, parse_xhtml_document, parse_xhtml_fragment};
pub use properties::{CLASS_NAME, ID, ListItem, Properties, PropertyValue};
pub use serialize::{to_json, to_json_pretty, to_xhtml};
