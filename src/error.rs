//! Errors at the file boundary of a conversion.
//!
//! The rewrite pipeline itself accepts any text, so every error here comes
//! from reading the source or writing the result. The io error is folded into
//! the message so a failure reports on a single line.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("Missing {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {error}", path.display())]
    Read { path: PathBuf, error: std::io::Error },

    #[error("failed to write {}: {error}", path.display())]
    Write { path: PathBuf, error: std::io::Error },
}
