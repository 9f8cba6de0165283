// Analysis module - feature extraction and diagnosis pipeline
//
// This module orchestrates the two-stage core pipeline:
//
// decoded samples → extract → Features → classify → Diagnosis
//
// Both stages are pure, synchronous, linear-time functions; one analysis
// request runs to completion before its result is observable. All shared
// state (the active clip) lives in the surrounding session layer.

pub mod classifier;
pub mod features;

pub use classifier::{classify, Diagnosis, Urgency};
pub use features::{extract, Features};

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Completed analysis of one audio clip
///
/// Pairs the extracted features with the diagnosis so the presentation and
/// history layers receive both together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub features: Features,
    pub diagnosis: Diagnosis,
}

/// Run the full analysis pipeline over a decoded mono sample buffer
///
/// # Arguments
/// * `samples` - Decoded mono amplitude samples in [-1, 1]
/// * `duration_seconds` - Clip duration reported by the decoder
///
/// # Returns
/// * `Ok(AnalysisReport)` - Features plus diagnosis
/// * `Err(AnalysisError::InvalidInput)` - If the buffer is empty
pub fn analyze(samples: &[f32], duration_seconds: f32) -> Result<AnalysisReport, AnalysisError> {
    let features = features::extract(samples, duration_seconds)?;
    log::debug!(
        "Extracted features: energy {:.4}, zcr {:.4}, duration {:.2}s",
        features.energy,
        features.zcr,
        features.duration_seconds
    );

    let diagnosis = classifier::classify(&features);
    log::info!(
        "Diagnosis: {} ({}), confidence {:.2}",
        diagnosis.urgency.label(),
        diagnosis.issue,
        diagnosis.confidence
    );

    Ok(AnalysisReport {
        features,
        diagnosis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_produces_knock_verdict() {
        // Constant buffer: energy 0.2, no crossings, long enough clip
        let samples = vec![0.2; 8000];
        let report = analyze(&samples, 3.0).unwrap();

        assert_eq!(report.features.zcr, 0.0);
        assert_eq!(report.diagnosis.urgency, Urgency::Urgent);
    }

    #[test]
    fn test_pipeline_rejects_empty_buffer() {
        let result = analyze(&[], 3.0);
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_report_serde_roundtrip() {
        let samples = vec![0.2; 8000];
        let report = analyze(&samples, 3.0).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
