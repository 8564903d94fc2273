//! Display-math detection and source recovery.
//!
//! A rendered equation flattens to a mix of visual layout glyphs and embedded
//! source, which is useless as a preview. Math renderers usually keep the
//! TeX source in a nested annotation element; a `MathSource` knows how a
//! given renderer marks display blocks and where it keeps that source.

use crate::config::MathConfig;
use anchormap_hast::Element;
use std::fmt::Debug;

/// Renderer-specific knowledge used by the extractor for equations.
pub trait MathSource: Send + Sync + Debug {
    /// Whether the element is a block-level rendered equation.
    fn is_display_math(&self, element: &Element) -> bool;

    /// Machine-readable source of the equation, if the renderer embedded a
    /// non-empty one.
    fn raw_source(&self, element: &Element) -> Option<String>;

    /// Returns a human-readable name for this source (for logging).
    fn name(&self) -> &'static str;
}

/// Finds display blocks by class token and source by an annotation element
/// with a recognised `encoding` attribute. This is how KaTeX output looks:
///
/// ```text
/// <span class="katex-display"><span class="katex"><span class="katex-mathml">
///   <math><semantics>...<annotation encoding="application/x-tex">E=mc^2</annotation>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationMathSource {
    display_classes: Vec<String>,
    annotation_tag: String,
    source_encodings: Vec<String>,
}

impl AnnotationMathSource {
    pub fn new(config: &MathConfig) -> Self {
        Self {
            display_classes: config.display_classes.clone(),
            annotation_tag: config.annotation_tag.clone(),
            source_encodings: config.source_encodings.clone(),
        }
    }

    /// KaTeX markers: `katex-display` blocks with TeX annotations.
    pub fn katex() -> Self {
        Self::new(&MathConfig::default())
    }

    fn is_source_annotation(&self, element: &Element) -> bool {
        element.tag_name == self.annotation_tag
            && element
                .property_str("encoding")
                .is_some_and(|enc| self.source_encodings.iter().any(|known| known == enc))
    }
}

impl Default for AnnotationMathSource {
    fn default() -> Self {
        Self::katex()
    }
}

impl MathSource for AnnotationMathSource {
    fn is_display_math(&self, element: &Element) -> bool {
        self.display_classes
            .iter()
            .any(|class| element.has_class(class))
    }

    fn raw_source(&self, element: &Element) -> Option<String> {
        // The last matching annotation wins when a block holds several.
        let mut found = None;
        element.walk_elements(&mut |el| {
            if self.is_source_annotation(el) {
                found = Some(el.text_content());
            }
        });
        found.filter(|source| !source.is_empty())
    }

    fn name(&self) -> &'static str {
        "annotation"
    }
}
