use std::fs;

use logoscan::config::parse_config;
use logoscan::errors::ScanError;
use logoscan::scanner::ScheduleMode;
use tempfile::TempDir;

#[tokio::test]
async fn test_parse_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logoscan.yaml");
    fs::write(
        &path,
        r#"
files:
  - ./images/cmu.jpg
  - ./images/logo-types-collection.jpg
mode: concurrent
detector:
  endpoint: http://localhost:8080
  api_key: $LOGOSCAN_TEST_KEY
  project_id: demo-project
  max_results: 3
"#,
    )
    .unwrap();

    let config = parse_config(&path).await.unwrap();

    assert_eq!(config.files.as_ref().unwrap().len(), 2);
    assert_eq!(config.mode, Some(ScheduleMode::Concurrent));
    let detector = config.detector.unwrap();
    assert_eq!(detector.endpoint.as_deref(), Some("http://localhost:8080"));
    assert_eq!(detector.api_key.as_deref(), Some("$LOGOSCAN_TEST_KEY"));
    assert_eq!(detector.project_id.as_deref(), Some("demo-project"));
    assert_eq!(detector.max_results, Some(3));
}

#[tokio::test]
async fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let err = parse_config(&dir.path().join("absent.yaml")).await.unwrap_err();
    assert!(matches!(err, ScanError::Config(_)));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_oversized_config_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.yaml");
    let mut content = String::from("files:\n");
    while content.len() <= 1_048_576 {
        content.push_str("  - ./images/some-long-file-name-for-padding.jpg\n");
    }
    fs::write(&path, content).unwrap();

    let err = parse_config(&path).await.unwrap_err();
    assert!(err.to_string().contains("1MB"));
}

#[tokio::test]
async fn test_malformed_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "files: [unterminated\n").unwrap();

    let err = parse_config(&path).await.unwrap_err();
    assert!(matches!(err, ScanError::Yaml(_)));
}

#[tokio::test]
async fn test_wrong_field_type() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typed.yaml");
    fs::write(&path, "detector:\n  max_results: lots\n").unwrap();

    assert!(parse_config(&path).await.is_err());
}
