// Temporal module - Time-domain feature computation
//
// This module computes features directly from time-domain audio signals.
// Both functions are single linear passes over the buffer and require a
// non-empty input, which the extractor coordinator enforces.

/// Compute root-mean-square amplitude
///
/// Formula: RMS = sqrt((1 / N) × Σ x[n]²)
///
/// Squared samples are accumulated in f64 and the result narrowed to f32,
/// so buffers of amplitudes in [-1, 1] stay numerically stable at any
/// realistic clip length.
pub(crate) fn compute_rms(samples: &[f32]) -> f32 {
    let sum_squares: f64 = samples.iter().map(|&x| (x as f64) * (x as f64)).sum();
    (sum_squares / samples.len() as f64).sqrt() as f32
}

/// Compute zero-crossing rate (ZCR)
///
/// Counts transitions where one sample is non-negative and the following
/// sample is negative, or vice versa, normalized by total sample count.
/// Exact zeros sit on the non-negative side: a run of zeros produces a
/// single crossing when entered from a negative sample and none otherwise.
/// The classifier thresholds are tuned against this exact definition.
pub(crate) fn compute_zcr(samples: &[f32]) -> f32 {
    let mut crossings = 0usize;
    for i in 1..samples.len() {
        if (samples[i - 1] >= 0.0 && samples[i] < 0.0)
            || (samples[i - 1] < 0.0 && samples[i] >= 0.0)
        {
            crossings += 1;
        }
    }

    crossings as f32 / samples.len() as f32
}
