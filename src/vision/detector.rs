use async_trait::async_trait;
use super::types::{DetectionResult, DetectorError};

/// A remote logo-detection backend.
///
/// Implementations must be safe to call concurrently; the scanner may have
/// one request per input file in flight at once.
#[async_trait]
pub trait LogoDetector: Send + Sync {
    /// Run logo detection on a single image, given as a local path or a
    /// remote image URI.
    async fn detect(&self, file_name: &str) -> Result<DetectionResult, DetectorError>;

    /// Backend name for logging
    fn backend_name(&self) -> &str;
}
