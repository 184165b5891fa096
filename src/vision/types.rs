use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One detected logo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogoAnnotation {
    /// Text label of the logo, e.g. "Nike".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Detection confidence, conventionally in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl LogoAnnotation {
    pub fn new(description: &str, score: f64) -> Self {
        Self { description: Some(description.to_string()), score: Some(score) }
    }

    /// The description, if present and non-empty.
    pub fn label(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Everything the detector reported for one image.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(rename = "logoAnnotations", default)]
    pub annotations: Vec<LogoAnnotation>,
}

impl DetectionResult {
    pub fn new(annotations: Vec<LogoAnnotation>) -> Self {
        Self { annotations }
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Error code reported by a detector. Local I/O failures carry a symbolic
/// name (`ENOENT`), remote failures carry a numeric RPC status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Status(i64),
    Name(String),
}

impl ErrorCode {
    pub const FILE_NOT_FOUND: &'static str = "ENOENT";
    pub const ACCESS_DENIED: &'static str = "EACCES";
    pub const IO: &'static str = "EIO";

    pub fn name(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(code) => write!(f, "{}", code),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Failure returned by a [`LogoDetector`](super::LogoDetector).
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("detector error {code}: {}", .details.as_deref().unwrap_or("no details"))]
pub struct DetectorError {
    pub code: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl DetectorError {
    pub fn new(code: ErrorCode, details: Option<String>) -> Self {
        Self { code, details }
    }

    pub fn status(code: i64, details: impl Into<String>) -> Self {
        Self { code: ErrorCode::Status(code), details: Some(details.into()) }
    }

    /// Map a local read failure onto the symbolic codes the scanner understands.
    pub fn from_io(file_name: &str, err: &std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FILE_NOT_FOUND,
            std::io::ErrorKind::PermissionDenied => ErrorCode::ACCESS_DENIED,
            _ => ErrorCode::IO,
        };
        Self {
            code: ErrorCode::name(code),
            details: Some(format!("{}: {}", file_name, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_skips_empty_description() {
        let empty = LogoAnnotation { description: Some(String::new()), score: Some(0.5) };
        assert_eq!(empty.label(), None);
        assert_eq!(LogoAnnotation::default().label(), None);
        assert_eq!(LogoAnnotation::new("Nike", 0.9).label(), Some("Nike"));
    }

    #[test]
    fn test_detection_result_missing_annotations() {
        let parsed: DetectionResult = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_error_code_untagged() {
        let numeric: ErrorCode = serde_json::from_str("7").unwrap();
        assert_eq!(numeric, ErrorCode::Status(7));
        let named: ErrorCode = serde_json::from_str("\"ENOENT\"").unwrap();
        assert_eq!(named, ErrorCode::name("ENOENT"));
    }

    #[test]
    fn test_from_io_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DetectorError::from_io("a.jpg", &io);
        assert_eq!(err.code, ErrorCode::name(ErrorCode::FILE_NOT_FOUND));
        assert!(err.details.unwrap().contains("a.jpg"));
    }

    #[test]
    fn test_from_io_permission_denied() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(DetectorError::from_io("a.jpg", &io).code, ErrorCode::name("EACCES"));
    }

    #[test]
    fn test_display_without_details() {
        let err = DetectorError::new(ErrorCode::Status(13), None);
        assert_eq!(err.to_string(), "detector error 13: no details");
    }
}
