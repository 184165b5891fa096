use serde::{Deserialize, Serialize};
use crate::vision::status;
use crate::vision::{DetectorError, ErrorCode};

/// Why a single file could not be summarised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The local input file does not exist.
    FileNotFound,
    /// The remote service refused or could not locate the resource.
    RemoteNotFound,
    /// Any other detector failure.
    Unclassified,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileNotFound => "FileNotFound",
            Self::RemoteNotFound => "RemoteNotFound",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DetectorError {
    /// Route this failure to exactly one [`FailureKind`]. Only the code is
    /// inspected; the details text never affects the result.
    pub fn classify(&self) -> FailureKind {
        match &self.code {
            ErrorCode::Name(name) if name == ErrorCode::FILE_NOT_FOUND => FailureKind::FileNotFound,
            ErrorCode::Status(status::PERMISSION_DENIED) => FailureKind::RemoteNotFound,
            _ => FailureKind::Unclassified,
        }
    }
}
