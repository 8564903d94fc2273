pub mod anchor;
pub mod ids;

pub use anchor::{Anchor, AnchorMap, AnchorType};
pub use ids::AnchorId;
