use clap::{Parser, Subcommand, Args};
use crate::scanner::ScheduleMode;

#[derive(Parser)]
#[command(name = "logoscan", version, about = "Detect logos in images with the Cloud Vision API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress per-logo "found" lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit diagnostics as JSON records
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run logo detection on a list of images
    Scan(ScanArgs),
    /// Scan the bundled image list concurrently, pause, then sequentially
    Demo(DemoArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone, Default)]
pub struct DetectorArgs {
    /// Cloud Vision API key (or set GOOGLE_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Project billed for requests (or set GOOGLE_CLOUD_PROJECT)
    #[arg(long)]
    pub project_id: Option<String>,

    /// Vision API base URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Maximum logos returned per image
    #[arg(long)]
    pub max_results: Option<u32>,
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Image paths or gs:// / http(s):// URIs, scanned in order
    pub files: Vec<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Scheduling of per-file requests
    #[arg(long, value_enum)]
    pub mode: Option<ScheduleMode>,

    #[command(flatten)]
    pub detector: DetectorArgs,

    /// Print the collected outcomes as JSON after the scan
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when any file fails
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Clone)]
pub struct DemoArgs {
    #[command(flatten)]
    pub detector: DetectorArgs,

    /// Pause between the concurrent and sequential runs, in milliseconds
    #[arg(long, default_value = "1000")]
    pub pause_ms: u64,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
