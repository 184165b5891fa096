use std::fmt;
use std::sync::Mutex;

/// Which console stream a line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    Stderr,
}

/// One user-facing console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Progress { file_name: String },
    Found { file_name: String, description: String },
    Summary { file_name: String, average_score: Option<f64> },
    FileNotFound { file_name: String },
    RemoteNotFound { file_name: String, details: Option<String> },
    Unclassified { file_name: String, detail: Option<String> },
}

impl ReportLine {
    pub fn channel(&self) -> Channel {
        match self {
            Self::Progress { .. } | Self::Found { .. } | Self::Summary { .. } => Channel::Stdout,
            Self::FileNotFound { .. } | Self::RemoteNotFound { .. } | Self::Unclassified { .. } => Channel::Stderr,
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            Self::Progress { file_name }
            | Self::Found { file_name, .. }
            | Self::Summary { file_name, .. }
            | Self::FileNotFound { file_name }
            | Self::RemoteNotFound { file_name, .. }
            | Self::Unclassified { file_name, .. } => file_name,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Progress { file_name } => write!(f, "Running logo detection on {}", file_name),
            Self::Found { file_name, description } => {
                write!(f, "\"{}\" found in in file {}", description, file_name)
            }
            Self::Summary { file_name, average_score: Some(avg) } => {
                write!(f, "Average score for {}: {}", file_name, avg)
            }
            Self::Summary { file_name, average_score: None } => {
                write!(f, "Average score for {}: n/a", file_name)
            }
            Self::FileNotFound { file_name } => write!(f, "File {} not found", file_name),
            Self::RemoteNotFound { file_name, details } => match details {
                Some(d) => f.write_str(d),
                None => write!(f, "Remote service rejected {}", file_name),
            },
            Self::Unclassified { file_name, detail } => write!(
                f,
                "Logo detection failed for {}: {}",
                file_name,
                detail.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

/// Sink for the console lines a scan produces.
pub trait ScanReporter: Send + Sync {
    fn emit(&self, line: &ReportLine);
}

/// Writes lines to stdout/stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    /// A quiet reporter drops the per-logo "found" lines.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ScanReporter for ConsoleReporter {
    fn emit(&self, line: &ReportLine) {
        if self.quiet && matches!(line, ReportLine::Found { .. }) {
            return;
        }
        match line.channel() {
            Channel::Stdout => println!("{}", line),
            Channel::Stderr => eprintln!("{}", line),
        }
    }
}

/// Keeps every line in memory, in emission order.
#[derive(Debug, Default)]
pub struct BufferedReporter {
    lines: Mutex<Vec<ReportLine>>,
}

impl BufferedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Rendered text of every line, in emission order.
    pub fn rendered(&self) -> Vec<String> {
        self.lines().iter().map(ToString::to_string).collect()
    }

    /// Rendered lines that concern one file.
    pub fn rendered_for(&self, file_name: &str) -> Vec<String> {
        self.lines()
            .iter()
            .filter(|l| l.file_name() == file_name)
            .map(ToString::to_string)
            .collect()
    }
}

impl ScanReporter for BufferedReporter {
    fn emit(&self, line: &ReportLine) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.clone());
        }
    }
}
