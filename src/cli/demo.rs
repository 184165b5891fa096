use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use crate::cli::commands::DemoArgs;
use crate::errors::ScanError;
use crate::scanner::{BatchLogoScanner, ConsoleReporter, ScanReporter, ScheduleMode};
use crate::vision::LogoDetector;

/// Scan the default list concurrently, wait, then scan it again sequentially
/// so the two orderings can be compared on one console.
pub async fn handle_demo(args: DemoArgs, quiet: bool) -> Result<(), ScanError> {
    let detector = super::build_detector(&args.detector, None)?;
    let reporter: Arc<dyn ScanReporter> = Arc::new(ConsoleReporter::new(quiet));
    run_comparison(detector, reporter, &super::default_files(), Duration::from_millis(args.pause_ms)).await;
    Ok(())
}

pub async fn run_comparison(
    detector: Arc<dyn LogoDetector>,
    reporter: Arc<dyn ScanReporter>,
    files: &[String],
    pause: Duration,
) {
    info!(
        git_hash = option_env!("GIT_HASH").unwrap_or("dev"),
        built = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
        "Starting demo run"
    );

    for (i, mode) in [ScheduleMode::Concurrent, ScheduleMode::Sequential].into_iter().enumerate() {
        if i > 0 {
            // Separates the two runs' output; not a rate limit
            tokio::time::sleep(pause).await;
        }
        BatchLogoScanner::new(detector.clone(), reporter.clone())
            .with_mode(mode)
            .scan_all(files)
            .await;
    }
}
