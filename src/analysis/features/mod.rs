// Feature extraction for vehicle sound diagnosis
//
// This module turns a decoded mono sample buffer into the fixed-shape
// feature record consumed by the rule classifier.
//
// Module organization:
// - types: Data structures (Features struct)
// - temporal: Time-domain computations (RMS energy, ZCR)
// - mod.rs: Coordinator (extract)
//
// Features extracted:
// 1. Energy: Root-mean-square amplitude (loudness measure)
// 2. Zero-Crossing Rate (ZCR): Rate of sign changes (noise/tonality measure)
// 3. Duration: Clip playback length, supplied by the decoding layer

mod temporal;
mod types;

pub use types::Features;

use crate::error::AnalysisError;

/// Extract the feature record from a decoded mono sample buffer
///
/// Pure function: one linear pass per feature, no I/O, no retained state.
/// `duration_seconds` comes from the decoder's container metadata because
/// the buffer holds only the first channel after downmixing.
///
/// # Arguments
/// * `samples` - Decoded mono amplitude samples in [-1, 1]
/// * `duration_seconds` - Playback duration reported by the decoder
///
/// # Returns
/// * `Ok(Features)` - Extracted feature record
/// * `Err(AnalysisError::InvalidInput)` - If the buffer is empty
pub fn extract(samples: &[f32], duration_seconds: f32) -> Result<Features, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput {
            reason: "sample buffer is empty".to_string(),
        });
    }

    Ok(Features {
        energy: temporal::compute_rms(samples),
        zcr: temporal::compute_zcr(samples),
        duration_seconds,
    })
}
