//! Paragraph rule.
//!
//! The pattern matches every line, including lines that earlier stages
//! already turned into HTML, so headings and lists end up inside `<p>` as
//! well. Leading whitespace, blank lines included, is consumed by the match.
//! A buffer ending in a blank line therefore gets two empty paragraphs: one
//! for the blank line and one for the empty end of the buffer.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::pipeline::rule::{RewriteRule, group};

static PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*(.*)$").unwrap());

/// Rule that wraps each line in `<p>`.
pub fn paragraph() -> RewriteRule {
    RewriteRule::new("paragraph", &PARAGRAPH, convert_paragraph)
}

fn convert_paragraph(caps: &Captures) -> String {
    let content = group(caps, 1)
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("<br/>\n");
    format!("<p>{content}</p>")
}
