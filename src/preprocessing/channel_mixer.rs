//! Channel downmixing (interleaved multi-channel to mono)
//!
//! Reduces an interleaved buffer to a single analysis channel by averaging
//! the channels of each frame. Mono input is copied unchanged, so a
//! single-channel file round-trips bit-for-bit.
//!
//! # Example
//!
//! ```
//! use crest_dsp::preprocessing::channel_mixer::downmix_to_mono;
//!
//! // Two stereo frames: [L0, R0, L1, R1]
//! let interleaved = [0.25f32, 0.75, -1.0, 1.0];
//! let mono = downmix_to_mono(&interleaved, 2);
//! assert_eq!(mono, vec![0.5, 0.0]);
//! ```

/// Downmix interleaved samples to mono by per-frame arithmetic mean
///
/// Each output sample is the mean of one frame's channels, accumulated in
/// double precision before rounding back to `f32`. The output has exactly
/// `samples.len() / channels` samples; downmixing never changes the frame
/// count.
///
/// The channel count must already be validated by the decoder: this is a
/// pure function with no failure mode. `samples.len()` must be an exact
/// multiple of `channels`.
///
/// # Arguments
///
/// * `samples` - Interleaved samples, frame-major
/// * `channels` - Number of interleaved channels (at least 1)
///
/// # Returns
///
/// One mono sample per input frame
pub fn downmix_to_mono(samples: &[f32], channels: u32) -> Vec<f32> {
    let channels = channels as usize;
    debug_assert!(channels > 0, "channel count must be positive");
    debug_assert_eq!(
        samples.len() % channels,
        0,
        "interleaved buffer must hold whole frames"
    );

    // Mono passes through untouched (no averaging artifact).
    if channels == 1 {
        return samples.to_vec();
    }

    log::debug!(
        "Downmixing {} frames from {} channels to mono",
        samples.len() / channels,
        channels
    );

    samples
        .chunks_exact(channels)
        .map(|frame| {
            let sum: f64 = frame.iter().map(|&s| s as f64).sum();
            (sum / channels as f64) as f32
        })
        .collect()
}
