use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, BoxStream, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::FailureKind;
use crate::vision::LogoDetector;
use super::outcome::ScanOutcome;
use super::report::{ReportLine, ScanReporter};

/// How per-file detector calls are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleMode {
    /// One call in flight; file N+1 starts after file N is fully reported.
    /// Output follows input order.
    #[default]
    Sequential,
    /// Every call is issued up front and each is reported as it settles.
    /// Output order follows completion order and is not deterministic.
    Concurrent,
}

impl ScheduleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Concurrent => "concurrent",
        }
    }
}

impl std::fmt::Display for ScheduleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcomes of one batch, in the order they were reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub mode: ScheduleMode,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<ScanOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failure()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Runs logo detection over a list of files, one independent pipeline per
/// file. A failing file never stops the batch.
pub struct BatchLogoScanner {
    detector: Arc<dyn LogoDetector>,
    reporter: Arc<dyn ScanReporter>,
    mode: ScheduleMode,
}

impl BatchLogoScanner {
    pub fn new(detector: Arc<dyn LogoDetector>, reporter: Arc<dyn ScanReporter>) -> Self {
        Self { detector, reporter, mode: ScheduleMode::default() }
    }

    pub fn with_mode(mut self, mode: ScheduleMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ScheduleMode {
        self.mode
    }

    /// Lazily scan `files`, yielding one outcome per input file.
    pub fn scan<'a>(&'a self, files: &'a [String]) -> BoxStream<'a, ScanOutcome> {
        match self.mode {
            ScheduleMode::Sequential => stream::iter(files)
                .then(move |file| self.scan_one(file))
                .boxed(),
            ScheduleMode::Concurrent => stream::iter(files)
                .map(move |file| self.scan_one(file))
                .buffer_unordered(files.len().max(1))
                .boxed(),
        }
    }

    /// Scan every file and collect the outcomes.
    pub async fn scan_all(&self, files: &[String]) -> BatchReport {
        info!(
            files = files.len(),
            mode = %self.mode,
            backend = self.detector.backend_name(),
            "Starting logo scan"
        );
        let started_at = Utc::now();
        let outcomes: Vec<ScanOutcome> = self.scan(files).collect().await;
        let report = BatchReport { mode: self.mode, started_at, finished_at: Utc::now(), outcomes };
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            elapsed_ms = (report.finished_at - report.started_at).num_milliseconds(),
            "Logo scan complete"
        );
        report
    }

    async fn scan_one(&self, file_name: &str) -> ScanOutcome {
        self.reporter.emit(&ReportLine::Progress { file_name: file_name.to_string() });

        let result = self.detector.detect(file_name).await;
        let outcome = ScanOutcome::from_detection(file_name, result);

        match &outcome {
            ScanOutcome::Summary { logo_descriptions, average_score, .. } => {
                debug!(file = %file_name, logos = logo_descriptions.len(), average = ?average_score, "File scanned");
            }
            ScanOutcome::Failure { kind: FailureKind::Unclassified, detail, .. } => {
                warn!(file = %file_name, detail = ?detail, "Unclassified detector failure");
            }
            ScanOutcome::Failure { kind, .. } => {
                debug!(file = %file_name, kind = %kind, "File failed");
            }
        }

        for line in outcome.report_lines() {
            self.reporter.emit(&line);
        }
        outcome
    }
}
