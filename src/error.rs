// Error types for the sound diagnosis application
//
// This module defines custom error types for analysis and history operations,
// providing structured error handling with error codes suitable for scripting
// against the CLI.

use log::error;
use std::fmt;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the CLI boundary.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Log an analysis error with structured context
pub fn log_analysis_error(err: &AnalysisError, context: &str) {
    error!(
        "Analysis error in {}: code={}, component=AnalysisSession, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Log a history error with structured context
pub fn log_history_error(err: &HistoryError, context: &str) {
    error!(
        "History error in {}: code={}, component=HistoryLog, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Analysis-related errors
///
/// These errors cover the path from raw input bytes to a finished diagnosis.
/// All of them are terminal for the current analysis request: no retry is
/// attempted and nothing is written to history.
///
/// Error code ranges: 1001-1003
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// No audio clip is loaded when analysis is requested
    MissingInput,

    /// Decoded sample buffer is empty or otherwise structurally invalid
    InvalidInput { reason: String },

    /// Raw bytes could not be decoded into sample data
    UnreadableAudio { details: String },
}

impl ErrorCode for AnalysisError {
    fn code(&self) -> i32 {
        match self {
            AnalysisError::MissingInput => 1001,
            AnalysisError::InvalidInput { .. } => 1002,
            AnalysisError::UnreadableAudio { .. } => 1003,
        }
    }

    fn message(&self) -> String {
        match self {
            AnalysisError::MissingInput => {
                "No audio loaded. Record or upload a clip first.".to_string()
            }
            AnalysisError::InvalidInput { reason } => {
                format!("Invalid audio input: {}", reason)
            }
            AnalysisError::UnreadableAudio { details } => {
                format!("Could not read this audio file: {}", details)
            }
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnalysisError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for AnalysisError {}

/// History persistence errors
///
/// These errors cover reading and writing the on-disk history log. They are
/// reported separately from analysis errors: a diagnosis that was already
/// produced stays valid even if recording it fails.
///
/// Error code ranges: 2001-2002
#[derive(Debug)]
pub enum HistoryError {
    /// Filesystem read/write failed
    Io { details: String },

    /// History file exists but does not parse as a history log
    Malformed { details: String },
}

impl ErrorCode for HistoryError {
    fn code(&self) -> i32 {
        match self {
            HistoryError::Io { .. } => 2001,
            HistoryError::Malformed { .. } => 2002,
        }
    }

    fn message(&self) -> String {
        match self {
            HistoryError::Io { details } => {
                format!("History file I/O failed: {}", details)
            }
            HistoryError::Malformed { details } => {
                format!("History file is malformed: {}", details)
            }
        }
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HistoryError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for HistoryError {}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        HistoryError::Io {
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        HistoryError::Malformed {
            details: err.to_string(),
        }
    }
}
