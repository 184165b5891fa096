pub mod commands;
pub mod demo;
pub mod scan;

pub use commands::{Cli, Commands};

use std::sync::Arc;
use tracing::debug;
use crate::config::{self, LogoscanConfig};
use crate::errors::ScanError;
use crate::vision::cloud::{DEFAULT_ENDPOINT, DEFAULT_MAX_RESULTS};
use crate::vision::{CloudVisionDetector, LogoDetector};
use commands::DetectorArgs;

/// Images scanned when no list is given.
pub const DEFAULT_FILES: &[&str] = &[
    "./images/cmu.jpg",
    "./images/logo-types-collection.jpg",
    "./images/not-a-file.jpg",
];

pub fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(|f| f.to_string()).collect()
}

/// Build the Cloud Vision detector from CLI flags, then the config file,
/// then the environment.
pub fn build_detector(
    args: &DetectorArgs,
    file_config: Option<&LogoscanConfig>,
) -> Result<Arc<dyn LogoDetector>, ScanError> {
    let section = file_config.and_then(|c| c.detector.as_ref());

    let api_key = args.api_key.clone()
        .or_else(|| section.and_then(|d| d.api_key.as_deref()).map(config::resolve_credential))
        .or_else(|| std::env::var(config::API_KEY_ENV).ok())
        .filter(|k| !k.is_empty() && !k.starts_with('$'))
        .ok_or_else(|| ScanError::Config(format!(
            "No API key provided. Use --api-key, detector.api_key in the config, or set {}",
            config::API_KEY_ENV
        )))?;

    let project_id = args.project_id.clone()
        .or_else(|| section.and_then(|d| d.project_id.as_deref()).map(config::resolve_credential))
        .or_else(|| std::env::var(config::PROJECT_ENV).ok());

    let endpoint = args.endpoint.clone()
        .or_else(|| section.and_then(|d| d.endpoint.clone()))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let max_results = args.max_results
        .or_else(|| section.and_then(|d| d.max_results))
        .unwrap_or(DEFAULT_MAX_RESULTS);
    if max_results == 0 {
        return Err(ScanError::Config("--max-results must be at least 1".into()));
    }

    debug!(endpoint = %endpoint, project = ?project_id, max_results, "Configured Cloud Vision detector");

    Ok(Arc::new(
        CloudVisionDetector::new(&api_key)
            .with_endpoint(&endpoint)
            .with_project_id(project_id.as_deref())
            .with_max_results(max_results),
    ))
}
