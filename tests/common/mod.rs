pub mod fixtures;

use anchormap::{AnchorPipeline, AnchorPipelineBuilder, InputFormat, PipelineError, RenderedDocument};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Builds a pipeline with default settings.
pub fn default_pipeline() -> Result<AnchorPipeline, PipelineError> {
    AnchorPipelineBuilder::new().build()
}

/// Runs the default pipeline over XHTML markup.
pub fn process_xhtml(markup: &str) -> Result<RenderedDocument, PipelineError> {
    default_pipeline()?.process_source(markup, InputFormat::Xhtml)
}

/// Collects `(id, label)` pairs for compact assertions.
pub fn ids_and_labels(document: &RenderedDocument) -> Vec<(String, String)> {
    document
        .anchors
        .iter()
        .map(|a| (a.id.to_string(), a.label.clone()))
        .collect()
}
