use std::path::PathBuf;

use clap::Parser;

mod commands;

/// Convert a Markdown file to HTML.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// The Markdown file to read
    input: PathBuf,

    /// The HTML file to write (overwritten if it exists)
    output: PathBuf,

    /// Only apply bold, emphasis, [[hash]] and ((strip)) rules
    #[arg(long, default_value = "false")]
    inline_only: bool,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    commands::convert::run(&args)?;

    Ok(())
}
