//! CLI argument parsing for the `mdpost` batch generator.
//!
//! Every flag has a default, so running `mdpost` with no arguments processes
//! `./inputs` into `./outputs`.
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "inputs";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

#[derive(Parser, Debug)]
#[command(
    name = "mdpost",
    version,
    about = "Generate a short social post for every markdown file in a directory",
    after_help = "Environment:\n  OPENAI_API_KEY   API credential (required unless --list)\n  OPENAI_MODEL     Model name (default gpt-4o-mini)\n  OPENAI_BASE_URL  API base URL (default https://api.openai.com/v1)\n  RUST_LOG         Log filter for stderr diagnostics\n\nExamples:\n  mdpost\n  mdpost --input-dir notes --output-dir posts\n  mdpost --list"
)]
pub struct Args {
    /// Directory scanned for *.md files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory that receives one <stem>.txt per input
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Model name, overriding OPENAI_MODEL
    #[arg(long, value_name = "NAME")]
    pub model: Option<String>,

    /// List discovered documents and exit without generating
    #[arg(long)]
    pub list: bool,

    /// Log progress details to stderr
    #[arg(long)]
    pub verbose: bool,
}
