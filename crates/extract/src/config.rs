//! Extractor configuration.
//!
//! Every field has a default matching the lesson site the anchor map was
//! built for (Vietnamese labels, KaTeX math), so an empty JSON object is a
//! valid configuration.

use serde::{Deserialize, Serialize};

/// How heading text is turned into an id slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugStyle {
    /// Lowercase, whitespace runs to `-`, drop non-word characters, then
    /// transliterate to ASCII (`Giới thiệu` -> `gioi-thieu`).
    #[default]
    Transliterate,
    /// The same rule restricted to ASCII word characters, without
    /// transliteration (`Giới thiệu` -> `gii-thiu`).
    Strict,
}

/// User-facing label strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub heading_prefix: String,
    pub paragraph_prefix: String,
    pub equation_prefix: String,
    /// Preview used for an equation whose source cannot be recovered.
    pub equation_placeholder: String,
    /// Appended to a heading label that was cut short.
    pub ellipsis: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            heading_prefix: "Phần: ".to_string(),
            paragraph_prefix: "Đoạn ".to_string(),
            equation_prefix: "Phương trình ".to_string(),
            equation_placeholder: "Phương trình toán học".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

/// Markers left behind by the math renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MathConfig {
    /// Class tokens that mark a block-level (display) equation.
    pub display_classes: Vec<String>,
    /// Tag name of the element holding the machine-readable source.
    pub annotation_tag: String,
    /// `encoding` values recognised as raw source.
    pub source_encodings: Vec<String>,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            display_classes: vec!["katex-display".to_string()],
            annotation_tag: "annotation".to_string(),
            source_encodings: vec!["application/x-tex".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorConfig {
    pub labels: Labels,
    pub math: MathConfig,
    pub slug_style: SlugStyle,
    /// Characters of heading text kept in the heading label.
    pub heading_label_max_chars: usize,
    /// Characters kept in every preview.
    pub preview_max_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            math: MathConfig::default(),
            slug_style: SlugStyle::default(),
            heading_label_max_chars: 30,
            preview_max_chars: 150,
        }
    }
}
