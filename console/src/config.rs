use std::path::PathBuf;

use clap::Parser;

/// Interactive lending desk for a small library.
#[derive(Debug, Parser)]
#[command(name = "library", version)]
pub struct Config {
    /// Directory receiving the daily rolling debug log
    #[arg(long, env = "LIBRARY_LOG_DIR", default_value = "./logs/")]
    pub log_dir: PathBuf,

    /// Only log to stderr
    #[arg(long, env = "LIBRARY_NO_LOG_FILE")]
    pub no_log_file: bool,
}
