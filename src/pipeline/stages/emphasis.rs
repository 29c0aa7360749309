//! Bold and emphasis rules.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::pipeline::rule::{RewriteRule, group};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());

/// Rule that turns `**text**` into `<b>text</b>`.
pub fn bold() -> RewriteRule {
    RewriteRule::new("bold", &BOLD, |caps: &Captures| {
        format!("<b>{}</b>", group(caps, 1))
    })
}

/// Rule that turns `__text__` into `<em>text</em>`.
pub fn emphasis() -> RewriteRule {
    RewriteRule::new("emphasis", &EMPHASIS, |caps: &Captures| {
        format!("<em>{}</em>", group(caps, 1))
    })
}
