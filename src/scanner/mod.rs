pub mod batch;
pub mod outcome;
pub mod report;

pub use batch::{BatchLogoScanner, BatchReport, ScheduleMode};
pub use outcome::ScanOutcome;
pub use report::{BufferedReporter, ConsoleReporter, ReportLine, ScanReporter};
