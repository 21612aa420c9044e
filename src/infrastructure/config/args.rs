use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "oxilens",
    version,
    about = "A lightweight terminal client for log classification and home price estimation",
    long_about = None
)]
#[allow(missing_docs)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the log classification service.
    #[arg(long, value_name = "URL")]
    pub classify_url: Option<String>,

    /// Base URL of the price prediction service.
    #[arg(long, value_name = "URL")]
    pub predict_url: Option<String>,

    /// Output path for the classified CSV artifact.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
