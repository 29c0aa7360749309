//! File-to-file conversion.

use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::pipeline::{Mode, Pipeline};

/// Summary of a finished conversion.
#[derive(Debug)]
pub struct ConvertResult {
    pub output_path: PathBuf,
    pub input_bytes: usize,
    pub output_bytes: usize,
}

/// Convert the file at `input` and write the HTML to `output`.
///
/// The input must be an existing regular file; otherwise nothing is written.
/// The output is created or fully overwritten.
pub fn convert_file(
    input: &Path,
    output: &Path,
    mode: Mode,
) -> Result<ConvertResult, ConvertError> {
    if !input.is_file() {
        return Err(ConvertError::MissingInput {
            path: input.to_path_buf(),
        });
    }

    let markdown = std::fs::read_to_string(input).map_err(|error| ConvertError::Read {
        path: input.to_path_buf(),
        error,
    })?;

    let html = Pipeline::for_mode(mode).run(&markdown);

    std::fs::write(output, &html).map_err(|error| ConvertError::Write {
        path: output.to_path_buf(),
        error,
    })?;

    Ok(ConvertResult {
        output_path: output.to_path_buf(),
        input_bytes: markdown.len(),
        output_bytes: html.len(),
    })
}
