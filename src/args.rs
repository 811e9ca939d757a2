use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "raidlogs",
    about = "Extract uwu-logs report URLs from a guild log into a JSON summary",
    version,
    long_about = None
)]
pub struct Args {
    /// Log file to scan for report URLs
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination for the JSON summary
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Guild name written to the summary
    #[arg(short, long)]
    pub guild: Option<String>,

    /// Source identifier written to the summary (defaults to the input path)
    #[arg(long)]
    pub source: Option<String>,

    /// Raid name, may be repeated
    #[arg(short, long = "raid")]
    pub raids: Vec<String>,

    /// First day covered by the logs (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day covered by the logs (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Literal URL prefix that report links start with
    #[arg(long)]
    pub prefix: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Derive the date range from report ids found in the log
    #[arg(long)]
    pub infer_dates: bool,

    /// Print the JSON summary to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Initialize raidlogs.toml with the default configuration
    #[arg(long)]
    pub init: bool,
}
