//! Translation text sanitization.
//!
//! Translation resources embed footnote references as superscript tags and
//! occasionally other markup. Display wants plain text: footnote markers
//! are dropped with their content, every other tag is stripped keeping its
//! text, and whitespace is collapsed.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Footnote markers carry no prose, drop them with their content.
    static ref FOOTNOTE_TAG: Regex =
        Regex::new(r"(?is)<sup\b[^>]*>.*?</sup>").expect("footnote pattern");
    static ref HTML_COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").expect("comment pattern");
    // Any remaining element tag, opening or closing, with attributes.
    static ref MARKUP_TAG: Regex = Regex::new(r"(?s)</?[a-zA-Z][^>]*>").expect("markup pattern");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern");
}

/// Reduce translation markup to plain text.
///
/// Idempotent: plain text comes back unchanged.
pub fn sanitize_translation(raw: &str) -> String {
    let text = FOOTNOTE_TAG.replace_all(raw, "");
    let text = HTML_COMMENT.replace_all(&text, "");
    let text = MARKUP_TAG.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}
