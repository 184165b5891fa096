use serde::{Deserialize, Serialize};
use crate::scanner::ScheduleMode;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogoscanConfig {
    pub files: Option<Vec<String>>,
    pub mode: Option<ScheduleMode>,
    pub detector: Option<DetectorConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DetectorConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub max_results: Option<u32>,
}
