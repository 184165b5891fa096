use std::path::Path;
use crate::errors::ScanError;
use super::types::LogoscanConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<LogoscanConfig, ScanError> {
    if !path.exists() {
        return Err(ScanError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(ScanError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

/// Parse and validate config text.
pub fn parse_config_str(content: &str) -> Result<LogoscanConfig, ScanError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // An empty document is an empty config
    if yaml.is_null() {
        return Ok(LogoscanConfig::default());
    }

    validate_schema(&yaml)?;

    let config: LogoscanConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema. Violations are logged, not fatal.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), ScanError> {
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| ScanError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| ScanError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| ScanError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

fn validate_semantics(config: &LogoscanConfig) -> Result<(), ScanError> {
    if let Some(detector) = &config.detector {
        if detector.max_results == Some(0) {
            return Err(ScanError::Config("detector.max_results must be at least 1".into()));
        }
        if let Some(endpoint) = &detector.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ScanError::Config(format!(
                    "detector.endpoint must be an http(s) URL, got '{}'",
                    endpoint
                )));
            }
        }
    }

    if let Some(files) = &config.files {
        if files.iter().any(|f| f.trim().is_empty()) {
            return Err(ScanError::Config("files must not contain empty paths".into()));
        }
        if files.is_empty() {
            warn!("Config lists no files; the default list will be used");
        }
    }

    Ok(())
}
