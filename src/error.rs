// src/error.rs
//! Error type for everything around the anchor pass: loading trees and
//! configuration, and writing results. The pass itself cannot fail.

use anchormap_hast::HastError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Document tree error: {0}")]
    Tree(#[from] HastError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
