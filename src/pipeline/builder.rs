// src/pipeline/builder.rs
use super::config::AnchorMapConfig;
use super::orchestrator::AnchorPipeline;
use crate::error::PipelineError;
use anchormap_extract::{AnchorExtractor, ExtractorConfig, MathSource};
use anchormap_refs::ReferenceText;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating an `AnchorPipeline`.
#[derive(Debug, Default)]
pub struct AnchorPipelineBuilder {
    config: AnchorMapConfig,
    math_source: Option<Arc<dyn MathSource>>,
    debug: bool,
}

impl AnchorPipelineBuilder {
    /// Creates a builder with the default labels, math detection and slug style.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: AnchorMapConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_extractor_config(mut self, extractor: ExtractorConfig) -> Self {
        self.config.extractor = extractor;
        self
    }

    pub fn with_reference_text(mut self, references: ReferenceText) -> Self {
        self.config.references = references;
        self
    }

    /// Loads the configuration from a JSON file. Keys missing from the file
    /// keep their defaults.
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.with_config_source(&source)
    }

    /// Loads the configuration from a JSON string.
    pub fn with_config_source(mut self, source: &str) -> Result<Self, PipelineError> {
        self.config = AnchorMapConfig::from_json(source)?;
        Ok(self)
    }

    /// Overrides how display math is recognised and where its source is read
    /// from. Without this, the KaTeX annotation strategy built from the math
    /// section of the configuration is used.
    pub fn with_math_source(mut self, math_source: Arc<dyn MathSource>) -> Self {
        self.math_source = Some(math_source);
        self
    }

    /// Enables debug features, such as dumping the tree after the anchor pass.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validates the configuration and creates the `AnchorPipeline`.
    pub fn build(self) -> Result<AnchorPipeline, PipelineError> {
        self.config.validate()?;
        let AnchorMapConfig {
            extractor,
            references,
        } = self.config;

        let mut anchor_extractor = AnchorExtractor::new(extractor);
        if let Some(math_source) = self.math_source {
            log::info!("Using '{}' math source.", math_source.name());
            anchor_extractor = anchor_extractor.with_math_source(math_source);
        }

        Ok(AnchorPipeline::new(anchor_extractor, references, self.debug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchormap_extract::SlugStyle;
    use std::io::Write;

    #[test]
    fn default_build_succeeds() {
        let pipeline = AnchorPipelineBuilder::new().build().unwrap();
        assert_eq!(pipeline.extractor().config(), &ExtractorConfig::default());
    }

    #[test]
    fn config_file_is_loaded() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"extractor":{{"slugStyle":"strict"}}}}"#).unwrap();

        let pipeline = AnchorPipelineBuilder::new()
            .with_config_file(file.path())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(pipeline.extractor().config().slug_style, SlugStyle::Strict);
    }

    #[test]
    fn missing_config_file_reports_path() {
        let err = AnchorPipelineBuilder::new()
            .with_config_file("does/not/exist.json")
            .unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn invalid_config_fails_at_build() {
        let mut extractor = ExtractorConfig::default();
        extractor.heading_label_max_chars = 0;
        let result = AnchorPipelineBuilder::new()
            .with_extractor_config(extractor)
            .build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
