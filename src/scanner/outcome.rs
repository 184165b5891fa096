use serde::{Deserialize, Serialize};
use crate::errors::FailureKind;
use crate::vision::{DetectionResult, DetectorError, LogoAnnotation};
use super::report::ReportLine;

/// Per-file result of a detection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScanOutcome {
    Summary {
        file_name: String,
        logo_descriptions: Vec<String>,
        /// `None` when no annotation carried a score.
        average_score: Option<f64>,
    },
    Failure {
        file_name: String,
        kind: FailureKind,
        detail: Option<String>,
    },
}

impl ScanOutcome {
    /// Derive the outcome for one file from the detector's response for that
    /// file alone.
    pub fn from_detection(file_name: &str, result: Result<DetectionResult, DetectorError>) -> Self {
        match result {
            Ok(detection) => Self::Summary {
                file_name: file_name.to_string(),
                logo_descriptions: detection
                    .annotations
                    .iter()
                    .filter_map(LogoAnnotation::label)
                    .map(str::to_string)
                    .collect(),
                average_score: average_score(&detection.annotations),
            },
            Err(err) => Self::Failure {
                file_name: file_name.to_string(),
                kind: err.classify(),
                detail: err.details.clone().or_else(|| Some(format!("code {}", err.code))),
            },
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            Self::Summary { file_name, .. } | Self::Failure { file_name, .. } => file_name,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failure { kind, .. } => Some(*kind),
            Self::Summary { .. } => None,
        }
    }

    /// Console lines reporting this outcome, in emission order. The progress
    /// line is not included; it is emitted before the detector is called.
    pub fn report_lines(&self) -> Vec<ReportLine> {
        match self {
            Self::Summary { file_name, logo_descriptions, average_score } => {
                let mut lines: Vec<ReportLine> = logo_descriptions
                    .iter()
                    .map(|d| ReportLine::Found { file_name: file_name.clone(), description: d.clone() })
                    .collect();
                lines.push(ReportLine::Summary { file_name: file_name.clone(), average_score: *average_score });
                lines
            }
            Self::Failure { file_name, kind, detail } => vec![match kind {
                FailureKind::FileNotFound => ReportLine::FileNotFound { file_name: file_name.clone() },
                FailureKind::RemoteNotFound => ReportLine::RemoteNotFound {
                    file_name: file_name.clone(),
                    details: detail.clone(),
                },
                FailureKind::Unclassified => ReportLine::Unclassified {
                    file_name: file_name.clone(),
                    detail: detail.clone(),
                },
            }],
        }
    }
}

/// Arithmetic mean of the scores present. Annotations without a score count
/// toward neither sum nor denominator.
pub fn average_score(annotations: &[LogoAnnotation]) -> Option<f64> {
    let scores: Vec<f64> = annotations.iter().filter_map(|a| a.score).collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}
