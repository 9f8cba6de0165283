// Decoding layer - turns audio files into mono sample buffers
//
// This module is the boundary between raw container bytes and the analysis
// core. It probes the container, decodes the default track, and downmixes
// interleaved channels to a single mono channel by averaging. Every failure
// on this path surfaces as UnreadableAudio; the analysis core is never
// invoked on input that did not decode.

use std::fs::File;
use std::path::Path;

use log::{debug, warn};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;

/// Decoded mono audio clip handed to the analysis session
#[derive(Debug, Clone)]
pub struct DecodedClip {
    /// Mono amplitude samples in [-1, 1]
    pub samples: Vec<f32>,
    /// Sample rate of the decoded stream in Hz
    pub sample_rate: u32,
    /// Playback duration in seconds
    ///
    /// Taken from the container's own frame count and time base when the
    /// container reports them; only recomputed from the decoded sample
    /// count when it does not.
    pub duration_seconds: f32,
}

fn unreadable(context: &str, err: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::UnreadableAudio {
        details: format!("{}: {}", context, err),
    }
}

/// Decode an audio file into a mono clip
///
/// Supports WAV, MP3, FLAC, OGG, AAC and MP4 containers via symphonia.
///
/// # Arguments
/// * `path` - Path of the audio file to decode
///
/// # Returns
/// * `Ok(DecodedClip)` - Mono samples, sample rate and clip duration
/// * `Err(AnalysisError::UnreadableAudio)` - If the file cannot be opened,
///   probed or decoded
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodedClip, AnalysisError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| unreadable("opening file", err))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|err| unreadable("probing container", err))?;

    let mut format = probed.format;
    let track = format
        .default_track()
        .ok_or_else(|| AnalysisError::UnreadableAudio {
            details: "no default audio track".to_string(),
        })?;

    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);

    // Clip duration from the container's own metadata; the downmixed sample
    // count is only a fallback when the container reports no frame count.
    let metadata_duration = match (track.codec_params.n_frames, track.codec_params.time_base) {
        (Some(frames), Some(time_base)) => {
            let time = time_base.calc_time(frames);
            Some((time.seconds as f64 + time.frac) as f32)
        }
        (Some(frames), None) => Some(frames as f32 / sample_rate as f32),
        _ => None,
    };

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|err| unreadable("creating decoder", err))?;

    let track_id = track.id;
    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut max_frames: usize = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref err))
                if err.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(err) => {
                warn!("Stopping decode early: {err}");
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(err)) => {
                warn!("Skipping undecodable packet: {err}");
                continue;
            }
            Err(err) => {
                warn!("Stopping decode early: {err}");
                break;
            }
        };

        let spec = *decoded.spec();
        let channels = spec.channels.count().max(1);
        let frames = decoded.capacity();
        // Reuse the sample buffer unless this packet needs a bigger one
        if sample_buf.is_none() || frames > max_frames {
            sample_buf = Some(SampleBuffer::<f32>::new(frames as u64, spec));
            max_frames = frames;
        }
        let Some(buf) = sample_buf.as_mut() else {
            continue;
        };
        buf.copy_interleaved_ref(decoded);

        // Downmix to mono by averaging the interleaved channels
        for frame in buf.samples().chunks(channels) {
            let mono: f32 = frame.iter().sum::<f32>() / channels as f32;
            samples.push(mono);
        }
    }

    let duration_seconds =
        metadata_duration.unwrap_or_else(|| samples.len() as f32 / sample_rate as f32);

    debug!(
        "Decoded {} mono samples @ {}Hz, duration {:.2}s from {}",
        samples.len(),
        sample_rate,
        duration_seconds,
        path.display()
    );

    Ok(DecodedClip {
        samples,
        sample_rate,
        duration_seconds,
    })
}
