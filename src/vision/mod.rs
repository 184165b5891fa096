pub mod cloud;
pub mod detector;
pub mod status;
pub mod types;

pub use cloud::CloudVisionDetector;
pub use detector::LogoDetector;
pub use types::{DetectionResult, DetectorError, ErrorCode, LogoAnnotation};
