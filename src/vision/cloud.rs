use async_trait::async_trait;
use data_encoding::BASE64;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;
use crate::config::redact_credentials;
use super::detector::LogoDetector;
use super::status;
use super::types::{DetectionResult, DetectorError, ErrorCode};

pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com";
pub const DEFAULT_MAX_RESULTS: u32 = 10;

const REMOTE_SCHEMES: &[&str] = &["gs://", "http://", "https://"];

/// Logo detection backed by the Cloud Vision `images:annotate` REST method.
pub struct CloudVisionDetector {
    client: Client,
    api_key: String,
    endpoint: String,
    project_id: Option<String>,
    max_results: u32,
}

impl CloudVisionDetector {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            project_id: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_project_id(mut self, project_id: Option<&str>) -> Self {
        self.project_id = project_id.filter(|p| !p.is_empty()).map(str::to_string);
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Build the `image` object for a request: remote URIs are passed by
    /// reference, local files are read and inlined.
    async fn image_source(&self, file_name: &str) -> Result<Value, DetectorError> {
        if is_remote_uri(file_name) {
            return Ok(json!({"source": {"imageUri": file_name}}));
        }
        let bytes = tokio::fs::read(file_name)
            .await
            .map_err(|e| DetectorError::from_io(file_name, &e))?;
        debug!(file = %file_name, bytes = bytes.len(), "Read local image");
        Ok(json!({"content": BASE64.encode(&bytes)}))
    }

    fn transport_error(&self, err: reqwest::Error) -> DetectorError {
        let code = if err.is_timeout() {
            status::DEADLINE_EXCEEDED
        } else if err.is_connect() {
            status::UNAVAILABLE
        } else {
            status::UNKNOWN
        };
        let message = redact_credentials(&err.to_string(), &[&self.api_key]);
        DetectorError::status(code, format!("Cloud Vision request failed: {}", message))
    }
}

#[async_trait]
impl LogoDetector for CloudVisionDetector {
    async fn detect(&self, file_name: &str) -> Result<DetectionResult, DetectorError> {
        let image = self.image_source(file_name).await?;

        let body = json!({
            "requests": [{
                "image": image,
                "features": [{"type": "LOGO_DETECTION", "maxResults": self.max_results}],
            }]
        });

        let url = format!("{}/v1/images:annotate?key={}", self.endpoint, self.api_key);
        let mut request = self.client.post(&url).json(&body);
        if let Some(project) = &self.project_id {
            request = request.header("x-goog-user-project", project);
        }

        debug!(file = %file_name, endpoint = %self.endpoint, "Sending annotate request");
        let resp = request.send().await.map_err(|e| self.transport_error(e))?;
        let http_status = resp.status().as_u16();

        let data: Value = resp.json().await.map_err(|e| {
            let code = match status::code_for_http(http_status) {
                status::OK => status::UNKNOWN,
                other => other,
            };
            DetectorError::status(code, format!("Parse error: {}", e))
        })?;

        let result = parse_annotate_response(http_status, &data)?;
        debug!(file = %file_name, annotations = result.annotations.len(), "Annotate response parsed");
        Ok(result)
    }

    fn backend_name(&self) -> &str { "cloud-vision" }
}

pub fn is_remote_uri(file_name: &str) -> bool {
    REMOTE_SCHEMES.iter().any(|scheme| file_name.starts_with(scheme))
}

/// Interpret an `images:annotate` response body for a single-image request.
pub fn parse_annotate_response(http_status: u16, data: &Value) -> Result<DetectionResult, DetectorError> {
    if let Some(error) = data.get("error") {
        let code = error["status"]
            .as_str()
            .map(status::code_for_name)
            .unwrap_or_else(|| status::code_for_http(http_status));
        let message = error["message"].as_str().unwrap_or("Unknown error");
        return Err(DetectorError::status(code, message));
    }

    if !(200..300).contains(&http_status) {
        return Err(DetectorError::status(
            status::code_for_http(http_status),
            format!("Unexpected HTTP status {}", http_status),
        ));
    }

    let response = &data["responses"][0];
    if let Some(error) = response.get("error") {
        let code = error["code"].as_i64().unwrap_or(status::UNKNOWN);
        let details = error["message"].as_str().map(str::to_string);
        return Err(DetectorError::new(ErrorCode::Status(code), details));
    }

    if response.is_null() {
        return Ok(DetectionResult::default());
    }

    serde_json::from_value(response.clone())
        .map_err(|e| DetectorError::status(status::UNKNOWN, format!("Malformed annotations: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_logo_annotations() {
        let data = json!({
            "responses": [{
                "logoAnnotations": [
                    {"mid": "/m/0lwkh", "description": "Nike", "score": 0.9, "boundingPoly": {"vertices": []}},
                    {"description": "Puma", "score": 0.7}
                ]
            }]
        });
        let result = parse_annotate_response(200, &data).unwrap();
        assert_eq!(result.annotations.len(), 2);
        assert_eq!(result.annotations[0].label(), Some("Nike"));
        assert_eq!(result.annotations[1].score, Some(0.7));
    }

    #[test]
    fn test_parse_empty_response_object() {
        let data = json!({"responses": [{}]});
        assert!(parse_annotate_response(200, &data).unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_responses() {
        let data = json!({});
        assert!(parse_annotate_response(200, &data).unwrap().is_empty());
    }

    #[test]
    fn test_parse_per_image_error() {
        let data = json!({
            "responses": [{
                "error": {"code": 7, "message": "This API method requires billing to be enabled."}
            }]
        });
        let err = parse_annotate_response(200, &data).unwrap_err();
        assert_eq!(err.code, ErrorCode::Status(7));
        assert_eq!(err.details.as_deref(), Some("This API method requires billing to be enabled."));
    }

    #[test]
    fn test_parse_top_level_error_uses_status_name() {
        let data = json!({
            "error": {"code": 403, "message": "Billing disabled", "status": "PERMISSION_DENIED"}
        });
        let err = parse_annotate_response(403, &data).unwrap_err();
        assert_eq!(err.code, ErrorCode::Status(status::PERMISSION_DENIED));
        assert_eq!(err.details.as_deref(), Some("Billing disabled"));
    }

    #[test]
    fn test_parse_top_level_error_without_status_name() {
        let data = json!({"error": {"code": 429, "message": "Quota"}});
        let err = parse_annotate_response(429, &data).unwrap_err();
        assert_eq!(err.code, ErrorCode::Status(8));
    }

    #[test]
    fn test_parse_non_success_without_error_body() {
        let err = parse_annotate_response(503, &json!({})).unwrap_err();
        assert_eq!(err.code, ErrorCode::Status(status::UNAVAILABLE));
    }

    #[test]
    fn test_remote_uri_detection() {
        assert!(is_remote_uri("gs://bucket/logo.png"));
        assert!(is_remote_uri("https://example.com/a.jpg"));
        assert!(!is_remote_uri("./images/cmu.jpg"));
    }

    #[tokio::test]
    async fn test_missing_local_file_fails_before_request() {
        let detector = CloudVisionDetector::new("unused").with_endpoint("http://127.0.0.1:9");
        let err = detector.detect("./definitely/not/here.jpg").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::name(ErrorCode::FILE_NOT_FOUND));
    }

    #[test]
    fn test_builder_trims_endpoint_and_empty_project() {
        let detector = CloudVisionDetector::new("k")
            .with_endpoint("http://localhost:8080/")
            .with_project_id(Some(""))
            .with_max_results(3);
        assert_eq!(detector.endpoint, "http://localhost:8080");
        assert!(detector.project_id.is_none());
        assert_eq!(detector.max_results, 3);
    }
}
