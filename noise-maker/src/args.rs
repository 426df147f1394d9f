use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake access log files for testing", long_about = None)]
pub struct CliArgs {
    /// Number of log lines to generate.
    #[arg(long, default_value_t = 1000)]
    lines: usize,

    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}
