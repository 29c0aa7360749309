//! List rules.
//!
//! A list is a run of consecutive lines that start with the marker. The
//! `-` marker produces `<ul>` and the `*` marker produces `<ol>`, which is
//! the reverse of the usual Markdown reading but is how this dialect is
//! defined.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::pipeline::rule::RewriteRule;

static UNORDERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*-[ \t]+.*$(?:\n[ \t]*-[ \t]+.*$)*").unwrap());

static ORDERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\*[ \t]+.*$(?:\n[ \t]*\*[ \t]+.*$)*").unwrap());

/// Rule that turns a run of `- item` lines into one `<ul>` block.
pub fn unordered_list() -> RewriteRule {
    RewriteRule::new("unordered_list", &UNORDERED, convert_unordered_list)
}

/// Rule that turns a run of `* item` lines into one `<ol>` block.
pub fn ordered_list() -> RewriteRule {
    RewriteRule::new("ordered_list", &ORDERED, convert_ordered_list)
}

fn convert_unordered_list(caps: &Captures) -> String {
    format!("<ul>{}</ul>", list_items(&caps[0], '-'))
}

fn convert_ordered_list(caps: &Captures) -> String {
    format!("<ol>{}</ol>", list_items(&caps[0], '*'))
}

/// Render each line of a list block as a trimmed `<li>`, with no separator.
fn list_items(block: &str, marker: char) -> String {
    block
        .split('\n')
        .map(|line| {
            let line = line.trim_start();
            let item = line.strip_prefix(marker).unwrap_or(line);
            format!("<li>{}</li>", item.trim())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Stage;

    #[test]
    fn test_consecutive_items_share_one_block() {
        assert_eq!(
            unordered_list().apply("- item one\n- item two"),
            "<ul><li>item one</li><li>item two</li></ul>"
        );
    }

    #[test]
    fn test_items_are_trimmed() {
        assert_eq!(
            unordered_list().apply("  -   spaced out   \n\t- tabbed"),
            "<ul><li>spaced out</li><li>tabbed</li></ul>"
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        assert_eq!(
            unordered_list().apply("- a\n\n- b"),
            "<ul><li>a</li></ul>\n\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_surrounding_lines_untouched() {
        assert_eq!(
            unordered_list().apply("before\n- a\n- b\nafter"),
            "before\n<ul><li>a</li><li>b</li></ul>\nafter"
        );
    }

    #[test]
    fn test_marker_requires_space() {
        let rule = unordered_list();
        assert_eq!(rule.apply("-not an item"), "-not an item");
        assert_eq!(rule.apply("---"), "---");
    }

    #[test]
    fn test_star_marker_is_ordered() {
        assert_eq!(
            ordered_list().apply("* first\n* second\n* third"),
            "<ol><li>first</li><li>second</li><li>third</li></ol>"
        );
    }

    #[test]
    fn test_bold_text_is_not_an_ordered_item() {
        assert_eq!(ordered_list().apply("**bold** start"), "**bold** start");
    }

    #[test]
    fn test_markers_do_not_mix() {
        assert_eq!(
            unordered_list().apply("- dash\n* star"),
            "<ul><li>dash</li></ul>\n* star"
        );
        assert_eq!(ordered_list().apply("- dash\n* star"), "- dash\n<ol><li>star</li></ol>");
    }
}
