use crate::math::MathSource;
use anchormap_hast::Element;

/// Why an element may receive an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// `h1`..`h6`, with the level.
    Heading(u8),
    /// A display-math block, as reported by the math source.
    Equation,
    /// A `p` element.
    Paragraph,
}

/// Classifies an element. Headings win over display math, display math
/// wins over paragraphs.
pub fn classify(element: &Element, math: &dyn MathSource) -> Option<Eligibility> {
    if let Some(level) = heading_level(&element.tag_name) {
        return Some(Eligibility::Heading(level));
    }
    if math.is_display_math(element) {
        return Some(Eligibility::Equation);
    }
    if element.tag_name == "p" {
        return Some(Eligibility::Paragraph);
    }
    None
}

fn heading_level(tag_name: &str) -> Option<u8> {
    match tag_name.as_bytes() {
        [b'h', level @ b'1'..=b'6'] => Some(level - b'0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::AnnotationMathSource;

    #[test]
    fn recognises_all_six_heading_levels_only() {
        for level in 1..=6u8 {
            assert_eq!(heading_level(&format!("h{}", level)), Some(level));
        }
        assert_eq!(heading_level("h0"), None);
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("h10"), None);
        assert_eq!(heading_level("header"), None);
        assert_eq!(heading_level("hr"), None);
    }

    #[test]
    fn precedence_heading_then_math_then_paragraph() {
        let math = AnnotationMathSource::katex();
        let heading = Element::new("h2").with_class("katex-display");
        let math_p = Element::new("p").with_class("katex-display");
        let p = Element::new("p");
        let div = Element::new("div");

        assert_eq!(classify(&heading, &math), Some(Eligibility::Heading(2)));
        assert_eq!(classify(&math_p, &math), Some(Eligibility::Equation));
        assert_eq!(classify(&p, &math), Some(Eligibility::Paragraph));
        assert_eq!(classify(&div, &math), None);
    }
}
