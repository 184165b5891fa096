use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use crate::cli::commands::ScanArgs;
use crate::config::{self, LogoscanConfig};
use crate::errors::ScanError;
use crate::scanner::{BatchLogoScanner, ConsoleReporter};

pub async fn handle_scan(args: ScanArgs, quiet: bool) -> Result<(), ScanError> {
    let file_config = if let Some(config_path) = &args.config {
        Some(config::parse_config(&PathBuf::from(config_path)).await?)
    } else {
        None
    };

    let files = resolve_files(&args, file_config.as_ref());
    let mode = args.mode
        .or_else(|| file_config.as_ref().and_then(|c| c.mode))
        .unwrap_or_default();

    let detector = super::build_detector(&args.detector, file_config.as_ref())?;
    let scanner = BatchLogoScanner::new(detector, Arc::new(ConsoleReporter::new(quiet)))
        .with_mode(mode);

    info!(files = files.len(), mode = %mode, "Scanning images");
    let report = scanner.scan_all(&files).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.outcomes)?);
    }

    if args.strict && report.failed() > 0 {
        return Err(ScanError::BatchFailed { failed: report.failed(), total: report.total() });
    }

    Ok(())
}

/// Files named on the command line, else in the config, else the default list.
fn resolve_files(args: &ScanArgs, file_config: Option<&LogoscanConfig>) -> Vec<String> {
    if !args.files.is_empty() {
        return args.files.clone();
    }
    file_config
        .and_then(|c| c.files.clone())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(super::default_files)
}
