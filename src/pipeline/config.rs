use crate::error::PipelineError;
use anchormap_extract::ExtractorConfig;
use anchormap_refs::ReferenceText;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The interchange format of a document tree on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A hast tree serialized as JSON.
    HastJson,
    /// Well-formed XHTML markup (document or fragment).
    Xhtml,
}

impl InputFormat {
    /// Infers the format from a file extension.
    pub fn from_extension(extension: &str) -> Result<Self, PipelineError> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::HastJson),
            "html" | "htm" | "xhtml" | "xml" => Ok(InputFormat::Xhtml),
            other => Err(PipelineError::Config(format!(
                "Unsupported document file extension: .{}",
                other
            ))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, PipelineError> {
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        Self::from_extension(extension)
    }

    /// Extension used when writing a tree back out.
    pub fn extension(&self) -> &'static str {
        match self {
            InputFormat::HastJson => "json",
            InputFormat::Xhtml => "html",
        }
    }
}

/// Everything a configuration file may set.
///
/// ```json
/// {
///   "extractor": { "slugStyle": "strict", "previewMaxChars": 120 },
///   "references": { "panelDefaultTitle": "References" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnchorMapConfig {
    pub extractor: ExtractorConfig,
    pub references: ReferenceText,
}

impl AnchorMapConfig {
    pub fn from_json(source: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Rejects settings that would make every anchor useless.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let extractor = &self.extractor;
        if extractor.preview_max_chars == 0 {
            return Err(PipelineError::Config(
                "previewMaxChars must be greater than zero".to_string(),
            ));
        }
        if extractor.heading_label_max_chars == 0 {
            return Err(PipelineError::Config(
                "headingLabelMaxChars must be greater than zero".to_string(),
            ));
        }
        if let Some(bad) = extractor
            .math
            .display_classes
            .iter()
            .find(|class| class.is_empty() || class.chars().any(char::is_whitespace))
        {
            return Err(PipelineError::Config(format!(
                "Display math class '{}' is not a single class token",
                bad
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchormap_extract::SlugStyle;

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_extension("json").unwrap(), InputFormat::HastJson);
        assert_eq!(InputFormat::from_extension("XHTML").unwrap(), InputFormat::Xhtml);
        assert_eq!(
            InputFormat::from_path(Path::new("lesson/01.html")).unwrap(),
            InputFormat::Xhtml
        );
        assert!(matches!(
            InputFormat::from_extension("md"),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn nested_config_sections() {
        let config = AnchorMapConfig::from_json(
            r#"{"extractor":{"slugStyle":"strict"},"references":{"panelDefaultTitle":"Refs"}}"#,
        )
        .unwrap();
        assert_eq!(config.extractor.slug_style, SlugStyle::Strict);
        assert_eq!(config.extractor.preview_max_chars, 150);
        assert_eq!(config.references.panel_default_title, "Refs");
        assert_eq!(
            config.references.citation_title_prefix,
            ReferenceText::default().citation_title_prefix
        );
    }

    #[test]
    fn validation_rejects_unusable_settings() {
        let mut config = AnchorMapConfig::default();
        assert!(config.validate().is_ok());

        config.extractor.preview_max_chars = 0;
        assert!(config.validate().is_err());

        let mut config = AnchorMapConfig::default();
        config.extractor.math.display_classes = vec!["katex display".to_string()];
        assert!(config.validate().is_err());
    }
}
