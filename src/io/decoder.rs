//! Audio decoding using Symphonia
//!
//! Opens an audio file, selects its first decodable track, and materializes
//! the whole stream as one interleaved f32 buffer. Streams with more than
//! two channels are rejected before any sample data is read.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::DecodeError;

/// Immutable metadata of a decoded audio stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStreamInfo {
    /// Number of decoded sample frames (one frame = one sample per channel)
    pub frames: u64,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of interleaved channels (1 or 2; anything else is rejected)
    pub channels: u32,

    /// Number of sections (tracks) the container reports. Plain audio
    /// files have exactly one.
    pub sections: usize,

    /// Whether the underlying media source supports seeking
    pub seekable: bool,
}

impl AudioStreamInfo {
    /// Stream duration in seconds, derived from frame count and sample rate
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames as f32 / self.sample_rate as f32
    }
}

/// A fully decoded audio file: stream metadata plus interleaved samples
///
/// `samples.len()` is exactly `info.frames * info.channels`, frame-major
/// (all channels of frame 0, then all channels of frame 1, and so on).
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Metadata describing the decoded stream
    pub info: AudioStreamInfo,

    /// Interleaved PCM samples
    pub samples: Vec<f32>,
}

/// Decode an audio file to interleaved PCM samples
///
/// The file is decoded in full; no streaming. The decode handle lives only
/// for the duration of this call and is released on every exit path. The
/// channel layout is validated from the codec parameters before the codec
/// decoder is constructed, so an unsupported file is rejected without
/// reading any sample data.
///
/// # Arguments
///
/// * `path` - Path to an audio file in any format Symphonia can probe
///
/// # Returns
///
/// The decoded stream metadata and interleaved samples
///
/// # Errors
///
/// * [`DecodeError::OpenFailed`] if the file cannot be opened, probed, or
///   decoded; the message carries the codec library's diagnostic
/// * [`DecodeError::UnsupportedChannelLayout`] if the stream declares a
///   channel count other than 1 or 2
pub fn decode_file(path: &Path) -> Result<DecodedAudio, DecodeError> {
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path)
        .map_err(|e| DecodeError::OpenFailed(format!("{}: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());
    // Seekability belongs to the media source; capture it before the probe
    // consumes the stream.
    let seekable = mss.is_seekable();

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
        .map_err(|e| DecodeError::OpenFailed(format!("unrecognized container format: {}", e)))?;
    let mut format = probed.format;

    let sections = format.tracks().len();
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| DecodeError::OpenFailed("no decodable audio track found".to_string()))?;
    let track_id = track.id;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| DecodeError::OpenFailed("stream does not declare a sample rate".to_string()))?;
    let channels = track
        .codec_params
        .channels
        .map(|c| c.count() as u32)
        .ok_or_else(|| DecodeError::OpenFailed("stream does not declare a channel layout".to_string()))?;
    let declared_frames = track.codec_params.n_frames;

    // Reject unsupported layouts before constructing the codec decoder;
    // dropping the format reader here closes the file without reading
    // sample data.
    if !(1..=2).contains(&channels) {
        return Err(DecodeError::UnsupportedChannelLayout(channels));
    }

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| DecodeError::OpenFailed(format!("failed to create codec decoder: {}", e)))?;

    let mut samples: Vec<f32> = match declared_frames {
        Some(n) => Vec::with_capacity((n as usize).saturating_mul(channels as usize)),
        None => Vec::new(),
    };
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => {
                return Err(DecodeError::OpenFailed(format!("failed to read packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder
            .decode(&packet)
            .map_err(|e| DecodeError::OpenFailed(format!("failed to decode packet: {}", e)))?;

        if decoded.spec().channels.count() as u32 != channels {
            return Err(DecodeError::OpenFailed(
                "channel layout changed mid-stream".to_string(),
            ));
        }

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    // Every accepted packet contributed whole frames of `channels` samples,
    // so the division is exact.
    let frames = (samples.len() / channels as usize) as u64;
    if let Some(declared) = declared_frames {
        if declared != frames {
            log::warn!(
                "Container declared {} frames but {} were decoded; using the decoded count",
                declared,
                frames
            );
        }
    }

    log::debug!(
        "Decoded {} frames at {} Hz ({} channel(s), {} section(s), seekable: {})",
        frames,
        sample_rate,
        channels,
        sections,
        seekable
    );

    Ok(DecodedAudio {
        info: AudioStreamInfo {
            frames,
            sample_rate,
            channels,
            sections,
            seekable,
        },
        samples,
    })
}
