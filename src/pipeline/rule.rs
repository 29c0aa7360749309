//! Pattern-and-replacement rule descriptors.

use regex::{Captures, Regex};

use crate::pipeline::Stage;

/// Replacement function: receives one match's captures, returns its substitute.
pub type ReplaceFn = fn(&Captures) -> String;

/// A rewrite rule pairs a compiled pattern with a pure replacement function.
///
/// Applying a rule replaces every non-overlapping match in the buffer,
/// left to right, in a single pass. Text produced by the replacement is
/// never re-scanned by the same rule.
///
/// An empty match is kept even when it starts where the previous non-empty
/// match ended, so a pattern that can match the empty string also rewrites
/// the empty line at the end of `"text\n\n"`. Two empty matches never share
/// a position.
pub struct RewriteRule {
    name: &'static str,
    pattern: &'static Regex,
    replace: ReplaceFn,
}

impl RewriteRule {
    /// Create a new rule.
    pub fn new(name: &'static str, pattern: &'static Regex, replace: ReplaceFn) -> Self {
        Self {
            name,
            pattern,
            replace,
        }
    }
}

impl Stage for RewriteRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, buffer: &str) -> String {
        let mut output = String::with_capacity(buffer.len());
        let mut copied = 0;
        let mut start = 0;
        let mut last_empty_at = None;

        while start <= buffer.len() {
            let Some(caps) = self.pattern.captures_at(buffer, start) else {
                break;
            };
            let found = caps.get_match();

            if found.is_empty() && last_empty_at == Some(found.start()) {
                match buffer[found.start()..].chars().next() {
                    Some(ch) => {
                        start = found.start() + ch.len_utf8();
                        continue;
                    }
                    None => break,
                }
            }

            output.push_str(&buffer[copied..found.start()]);
            output.push_str(&(self.replace)(&caps));
            copied = found.end();
            start = found.end();
            last_empty_at = found.is_empty().then_some(found.end());
        }

        output.push_str(&buffer[copied..]);
        output
    }
}

/// Get a capture group's text, or an empty string if it did not participate.
pub(crate) fn group<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}
