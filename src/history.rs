// History log - bounded record of completed analyses
//
// Each successful analysis is prepended to a JSON file, newest first, and
// the file is truncated to the most recent entries. Failed analyses are
// never recorded. The analysis core does not depend on this module; the
// CLI packages the diagnosis and features into an entry after the fact.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisReport, Diagnosis, Features};
use crate::error::HistoryError;

/// Most recent entries retained in the log
pub const DEFAULT_MAX_ENTRIES: usize = 20;

/// One completed analysis as recorded on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Completion time, serialized as ISO-8601
    pub timestamp: DateTime<Utc>,
    pub diagnosis: Diagnosis,
    pub features: Features,
}

impl HistoryEntry {
    /// Package a finished report into an entry stamped with the current time
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            timestamp: Utc::now(),
            diagnosis: report.diagnosis.clone(),
            features: report.features,
        }
    }
}

/// File-backed history log, capped at a fixed number of entries
pub struct HistoryLog {
    path: PathBuf,
    max_entries: usize,
}

impl HistoryLog {
    pub fn new<P: Into<PathBuf>>(path: P, max_entries: usize) -> Self {
        Self {
            path: path.into(),
            max_entries,
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all recorded entries, newest first
    ///
    /// A missing file reads as an empty log; a file that exists but does not
    /// parse is reported as `HistoryError::Malformed`.
    pub fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let entries: Vec<HistoryEntry> = serde_json::from_str(&contents)?;
        Ok(entries)
    }

    /// Prepend an entry and truncate the log to the retention cap
    pub fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut entries = self.load()?;
        entries.insert(0, entry);
        entries.truncate(self.max_entries);

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;

        log::info!(
            "Recorded analysis to {} ({} entries)",
            self.path.display(),
            entries.len()
        );
        Ok(())
    }
}
