//! Anchor-map pipeline orchestration.
//!
//! - [`AnchorPipelineBuilder`]: Fluent builder for constructing an anchor pipeline
//! - [`AnchorPipeline`]: Runs the anchor pass over trees, files and batches
//! - [`InputFormat`]: Selects the tree parser from a file extension
//!
//! # Example
//!
//! ```no_run
//! use anchormap::AnchorPipelineBuilder;
//!
//! let pipeline = AnchorPipelineBuilder::new()
//!     .with_config_file("anchormap.json")?
//!     .build()?;
//!
//! let document = pipeline.process_file("lesson.html")?;
//! println!("{}", document.anchors_to_json()?);
//! # Ok::<(), anchormap::PipelineError>(())
//! ```

pub(crate) mod batch;
mod builder;
pub mod config;
pub mod metadata;
mod orchestrator;

pub use builder::AnchorPipelineBuilder;
pub use config::{AnchorMapConfig, InputFormat};
pub use metadata::{ANCHOR_MAP_KEY, attach_anchor_map, read_anchor_map};
pub use orchestrator::{AnchorPipeline, RenderedDocument};
