// Types module - Data structures for audio features

use serde::{Deserialize, Serialize};

/// Features extracted from one decoded audio clip
///
/// These features summarize the clip for the rule classifier. Each value is
/// computed once per analysis request and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Root-mean-square amplitude over the full buffer (non-negative)
    ///
    /// Measures the average loudness of the clip, ignoring frequency content.
    pub energy: f32,

    /// Zero-crossing rate (0.0 to 1.0, normalized by sample count)
    ///
    /// Fraction of adjacent-sample pairs whose sign differs. Higher values
    /// indicate more noise-like or high-frequency content.
    pub zcr: f32,

    /// Playback duration of the source clip in seconds
    ///
    /// Reported by the decoding layer from container metadata, not derived
    /// from the sample count of the analyzed channel.
    pub duration_seconds: f32,
}
