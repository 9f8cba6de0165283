// Session - request-scoped orchestration around the analysis core
//
// The session owns the single active clip reference: a new clip replaces
// the previous one, and one analysis runs extraction and classification to
// completion before any result is observable. The core functions themselves
// hold no state and no references to the decoding or storage layers.

use std::path::Path;

use crate::analysis::{self, AnalysisReport};
use crate::decode::{self, DecodedClip};
use crate::error::AnalysisError;

/// Holds the one active clip between load and analysis
#[derive(Debug, Default)]
pub struct AnalysisSession {
    active: Option<DecodedClip>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Decode a file and make it the active clip, replacing any previous one
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), AnalysisError> {
        let clip = decode::decode_file(path)?;
        self.active = Some(clip);
        Ok(())
    }

    /// Make an already-decoded clip the active one
    pub fn load_clip(&mut self, clip: DecodedClip) {
        self.active = Some(clip);
    }

    /// Drop the active clip
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// The currently loaded clip, if any
    pub fn active_clip(&self) -> Option<&DecodedClip> {
        self.active.as_ref()
    }

    /// Analyze the active clip
    ///
    /// # Returns
    /// * `Ok(AnalysisReport)` - Features plus diagnosis for the active clip
    /// * `Err(AnalysisError::MissingInput)` - If no clip is loaded; reported
    ///   before extraction is attempted
    pub fn analyze(&self) -> Result<AnalysisReport, AnalysisError> {
        let clip = self.active.as_ref().ok_or(AnalysisError::MissingInput)?;
        analysis::analyze(&clip.samples, clip.duration_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Urgency;

    fn constant_clip(value: f32, seconds: f32) -> DecodedClip {
        let sample_rate = 8000;
        DecodedClip {
            samples: vec![value; (seconds * sample_rate as f32) as usize],
            sample_rate,
            duration_seconds: seconds,
        }
    }

    #[test]
    fn test_analyze_without_clip_is_missing_input() {
        let session = AnalysisSession::new();
        assert_eq!(session.analyze(), Err(AnalysisError::MissingInput));
    }

    #[test]
    fn test_analyze_after_load() {
        let mut session = AnalysisSession::new();
        session.load_clip(constant_clip(0.2, 3.0));

        let report = session.analyze().unwrap();
        assert_eq!(report.diagnosis.urgency, Urgency::Urgent);
    }

    #[test]
    fn test_new_clip_replaces_previous() {
        let mut session = AnalysisSession::new();
        session.load_clip(constant_clip(0.2, 3.0));
        session.load_clip(constant_clip(0.0, 3.0));

        let report = session.analyze().unwrap();
        assert_eq!(report.features.energy, 0.0);
        assert_eq!(report.diagnosis.urgency, Urgency::Monitor);
    }

    #[test]
    fn test_clear_drops_active_clip() {
        let mut session = AnalysisSession::new();
        session.load_clip(constant_clip(0.2, 3.0));
        session.clear();

        assert!(session.active_clip().is_none());
        assert_eq!(session.analyze(), Err(AnalysisError::MissingInput));
    }

    #[test]
    fn test_analyze_does_not_consume_clip() {
        let mut session = AnalysisSession::new();
        session.load_clip(constant_clip(0.2, 3.0));

        let first = session.analyze().unwrap();
        let second = session.analyze().unwrap();
        assert_eq!(first, second, "Repeated analysis of one clip is stable");
    }
}
