// Presentation layer - text rendering of analysis results
//
// Rendering rounds the feature values (energy and ZCR to 3 decimals,
// duration to 1 decimal) and the confidence to an integer percentage.
// Rounding happens here only; the records keep the exact values.

use crate::analysis::{AnalysisReport, Diagnosis, Features};
use crate::history::HistoryEntry;

/// Confidence as an integer percentage, rounded to nearest
pub fn confidence_percent(confidence: f32) -> String {
    format!("{}%", (confidence * 100.0).round() as i32)
}

/// Diagnosis rationale with the feature values appended in rounded form
pub fn reason_with_features(diagnosis: &Diagnosis, features: &Features) -> String {
    format!(
        "{} (energy={:.3}, zcr={:.3}, duration={:.1}s)",
        diagnosis.reason, features.energy, features.zcr, features.duration_seconds
    )
}

/// Feature record as a short text block
pub fn render_features(features: &Features) -> String {
    format!(
        "Energy (RMS):       {:.3}\nZero-crossing rate: {:.3}\nDuration:           {:.1}s",
        features.energy, features.zcr, features.duration_seconds
    )
}

/// Full result card for one completed analysis
pub fn render_text(report: &AnalysisReport) -> String {
    format!(
        "Urgency:    {}\nIssue:      {}\nConfidence: {}\nReason:     {}\nNext step:  {}",
        report.diagnosis.urgency.label(),
        report.diagnosis.issue,
        confidence_percent(report.diagnosis.confidence),
        reason_with_features(&report.diagnosis, &report.features),
        report.diagnosis.next_step
    )
}

/// One-line summary of a recorded history entry
pub fn render_history_entry(entry: &HistoryEntry) -> String {
    format!(
        "{}  [{}] {} ({})",
        entry.timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
        entry.diagnosis.urgency.label(),
        entry.diagnosis.issue,
        confidence_percent(entry.diagnosis.confidence)
    )
}
