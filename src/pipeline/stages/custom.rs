//! Rules for the two bracket forms that only this dialect has.

use md5::{Digest, Md5};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::pipeline::rule::{RewriteRule, group};

static HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").unwrap());

static STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\((.*?)\)\)").unwrap());

/// Rule that replaces `[[text]]` with the MD5 digest of `text`.
pub fn hash() -> RewriteRule {
    RewriteRule::new("hash", &HASH, |caps: &Captures| md5_hex(group(caps, 1)))
}

/// Rule that replaces `((text))` with `text` minus every `c` and `C`.
pub fn strip() -> RewriteRule {
    RewriteRule::new("strip_c", &STRIP, |caps: &Captures| strip_c(group(caps, 1)))
}

/// Lowercase hex MD5 digest of the UTF-8 bytes of `text`.
pub fn md5_hex(text: &str) -> String {
    format!("{:x}", Md5::digest(text.as_bytes()))
}

/// Remove every `c` and `C` from `text`.
pub fn strip_c(text: &str) -> String {
    text.chars().filter(|ch| !matches!(ch, 'c' | 'C')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Stage;

    #[test]
    fn test_md5_hex() {
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_hash_rule_discards_content() {
        assert_eq!(
            hash().apply("id: [[abc]]!"),
            "id: 900150983cd24fb0d6963f7d28e17f72!"
        );
        assert_eq!(hash().apply("[[]]"), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash().apply("[[Hello]]"), hash().apply("[[Hello]]"));
    }

    #[test]
    fn test_strip_c() {
        assert_eq!(strip_c("Cocoa"), "ooa");
        assert_eq!(strip_c("no match"), "no math");
        assert_eq!(strip_c("ccCC"), "");
    }

    #[test]
    fn test_strip_rule() {
        assert_eq!(strip().apply("((Cocoa))"), "ooa");
        assert_eq!(
            strip().apply("a ((Chicago)) b ((cab))"),
            "a hiago b ab"
        );
    }

    #[test]
    fn test_strip_leaves_other_letters() {
        assert_eq!(strip().apply("((xyz))"), "xyz");
    }
}
