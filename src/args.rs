use clap::Parser;
use std::path::PathBuf;

/// Counts, over a list of VK polls, how many times each user picked the right answer.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File with one `poll-url;expected-answer` pair per line. Accepts `-i=<path>`.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where the report is written. Overwritten on every run.
    #[arg(short, long, default_value = "report.txt")]
    pub output: PathBuf,

    /// Skip the validation pass and go straight to counting.
    #[arg(long)]
    pub skip_tests: bool,

    /// Only run the validation pass.
    #[arg(long)]
    pub test: bool,

    /// Stop at the first poll that cannot be resolved instead of skipping it.
    #[arg(long)]
    pub fail_fast: bool,
}
