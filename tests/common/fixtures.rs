use serde_json::{Value, json};

/// KaTeX display markup as the math renderer emits it.
pub fn katex_display(tex: &str) -> String {
    format!(
        r#"<span class="katex-display"><span class="katex"><span class="katex-mathml"><math xmlns="http://www.w3.org/1998/Math/MathML" display="block"><semantics><mrow><mi>x</mi></mrow><annotation encoding="application/x-tex">{}</annotation></semantics></math></span><span class="katex-html" aria-hidden="true">x</span></span></span>"#,
        tex
    )
}

/// A short lesson: a heading, a paragraph, a display equation and a second
/// paragraph.
pub fn lesson_xhtml() -> String {
    format!(
        "<h1>Giới thiệu</h1>\n<p>Đây là đoạn đầu tiên.</p>\n{}\n<p>Đoạn thứ hai</p>",
        katex_display("E=mc^2")
    )
}

/// A full XHTML document wrapping `body`.
pub fn xhtml_document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html xmlns=\"http://www.w3.org/1999/xhtml\"><head><title>Bài học</title></head><body>{}</body></html>",
        body
    )
}

/// A lesson as a hast JSON tree, with a string-form `className` on the math
/// block and a comment inside the paragraph.
pub fn lesson_hast() -> Value {
    json!({
        "type": "root",
        "children": [
            {
                "type": "element",
                "tagName": "h2",
                "properties": {},
                "children": [{ "type": "text", "value": "Bài tập" }]
            },
            {
                "type": "element",
                "tagName": "p",
                "properties": { "className": ["lead"] },
                "children": [
                    { "type": "text", "value": "Giải " },
                    {
                        "type": "element",
                        "tagName": "strong",
                        "properties": {},
                        "children": [{ "type": "text", "value": "phương trình" }]
                    },
                    { "type": "comment", "value": "ghi chú" }
                ]
            },
            {
                "type": "element",
                "tagName": "div",
                "properties": { "className": "math katex-display" },
                "children": [
                    {
                        "type": "element",
                        "tagName": "annotation",
                        "properties": { "encoding": "application/x-tex" },
                        "children": [{ "type": "text", "value": "x^2 + 1 = 0" }]
                    }
                ]
            }
        ]
    })
}
