//! Outcome types shared by the processor and the run driver.

use std::path::PathBuf;

/// What happened to a single target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content already correct; nothing written.
    Unchanged,
    /// Content rewritten on disk.
    Fixed,
    /// Content would be rewritten (dry run); nothing written.
    WouldFix,
}

impl FileOutcome {
    pub fn label(self) -> &'static str {
        match self {
            FileOutcome::Unchanged => "unchanged",
            FileOutcome::Fixed => "fixed",
            FileOutcome::WouldFix => "would fix",
        }
    }
}

/// Per-file report. A failed read, decode or write lands in `result` as
/// `Err(reason)` and never aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<FileOutcome, String>,
}

/// Totals for a whole run, plus the individual reports in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    pub fn found(&self) -> usize {
        self.reports.len()
    }

    pub fn fixed(&self) -> usize {
        self.count(FileOutcome::Fixed)
    }

    pub fn would_fix(&self) -> usize {
        self.count(FileOutcome::WouldFix)
    }

    pub fn unchanged(&self) -> usize {
        self.count(FileOutcome::Unchanged)
    }

    pub fn errors(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.result.is_err())
            .count()
    }

    fn count(&self, outcome: FileOutcome) -> usize {
        self.reports
            .iter()
            .filter(|report| report.result == Ok(outcome))
            .count()
    }
}
