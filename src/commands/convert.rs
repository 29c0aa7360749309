use markdown2html::{Mode, convert_file};

use crate::Args;

pub fn run(args: &Args) -> Result<(), anyhow::Error> {
    let mode = if args.inline_only {
        Mode::InlineOnly
    } else {
        Mode::Full
    };

    let result = convert_file(&args.input, &args.output, mode)?;

    log::info!(
        "Converted {} ({} bytes) to {} ({} bytes)",
        args.input.display(),
        result.input_bytes,
        result.output_path.display(),
        result.output_bytes
    );

    Ok(())
}
