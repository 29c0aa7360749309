//! ATX-style heading rule.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::pipeline::rule::{RewriteRule, group};

/// One to six `#` at the start of a line, optional whitespace, then the heading text.
///
/// `\s*` also matches line breaks, so a bare `#` takes the next line as its text.
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,6})\s*(.*?)$").unwrap());

/// Rule that turns `## Title` into `<h2>Title</h2>`.
pub fn heading() -> RewriteRule {
    RewriteRule::new("heading", &HEADING, convert_heading)
}

fn convert_heading(caps: &Captures) -> String {
    let level = group(caps, 1).len();
    format!("<h{level}>{}</h{level}>", group(caps, 2))
}
