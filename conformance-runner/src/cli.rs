use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "conformance-runner",
    about = "Run the kestrel tokenizer over a directory of .kes fixtures"
)]
pub struct Cli {
    #[arg(default_value = "conformance-runner/fixtures")]
    pub path: PathBuf,

    /// Only run fixtures whose path contains this text
    #[arg(long)]
    pub filter: Option<String>,

    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Print per-section and most common failure statistics
    #[arg(long, default_value_t = false)]
    pub analyze: bool,
}
