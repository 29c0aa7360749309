//! The built-in rewrite rules.
//!
//! Block-level rules:
//!
//! 1. **heading** - `#`..`######` lines to `<h1>`..`<h6>`
//! 2. **unordered_list** - runs of `- item` lines to one `<ul>`
//! 3. **ordered_list** - runs of `* item` lines to one `<ol>`
//! 4. **paragraph** - every line, HTML included, wrapped in `<p>`
//!
//! Inline rules:
//!
//! 5. **bold** - `**text**` to `<b>text</b>`
//! 6. **emphasis** - `__text__` to `<em>text</em>`
//! 7. **hash** - `[[text]]` to the MD5 hex digest of `text`
//! 8. **strip_c** - `((text))` to `text` without `c` or `C`

mod custom;
mod emphasis;
mod headings;
mod lists;
mod paragraphs;

pub use custom::{hash, md5_hex, strip, strip_c};
pub use emphasis::{bold, emphasis};
pub use headings::heading;
pub use lists::{ordered_list, unordered_list};
pub use paragraphs::paragraph;
