use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{failed} of {total} files failed")]
    BatchFailed { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ScanError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::Config(_) => 2,
            ScanError::BatchFailed { .. } => 3,
            _ => 1,
        }
    }
}
