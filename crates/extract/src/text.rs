use crate::config::SlugStyle;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("BUG: invalid WHITESPACE_RUN regex literal"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w-]").expect("BUG: invalid NON_WORD regex literal"));

static NON_ASCII_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_-]").expect("BUG: invalid NON_ASCII_WORD regex literal")
});

/// Turns heading text into an id-safe token. Pure and deterministic.
///
/// Both styles lowercase, turn each whitespace run into one `-` and finally
/// drop everything but word characters and `-`. Underscores and existing
/// hyphens survive as they are. `Transliterate` maps letters to ASCII
/// (`ớ` to `o`, `đ` to `d`) before that last step.
pub fn slugify(text: &str, style: SlugStyle) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    match style {
        SlugStyle::Strict => NON_ASCII_WORD.replace_all(&hyphenated, "").into_owned(),
        SlugStyle::Transliterate => {
            let ascii = deunicode::deunicode(&hyphenated).to_ascii_lowercase();
            NON_WORD.replace_all(&ascii, "").into_owned()
        }
    }
}

/// The first `max` characters of `text`.
pub fn take_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Cuts `text` to `max` characters and replaces every newline with a space.
pub fn preview(text: &str, max: usize) -> String {
    take_chars(text, max).replace('\n', " ")
}

/// `prefix` + the first `max` characters of `text`, plus `ellipsis` when
/// anything was cut.
pub fn truncated_label(prefix: &str, text: &str, max: usize, ellipsis: &str) -> String {
    let head = take_chars(text, max);
    let mut label = String::with_capacity(prefix.len() + head.len() + ellipsis.len());
    label.push_str(prefix);
    label.push_str(head);
    if head.len() < text.len() {
        label.push_str(ellipsis);
    }
    label
}
