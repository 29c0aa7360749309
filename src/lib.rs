//! Convert a small Markdown dialect to HTML.
//!
//! Conversion is a fixed, ordered list of regex rewrites applied to the
//! whole document. See [`pipeline`] for the rules and their order.
//!
//! ```
//! assert_eq!(markdown2html::markdown_to_html("**x** __y__"), "<p><b>x</b> <em>y</em></p>");
//! ```

pub mod convert;
pub mod error;
pub mod pipeline;

pub use convert::{ConvertResult, convert_file};
pub use error::ConvertError;
pub use pipeline::{Mode, Pipeline, Stage, markdown_to_html};
