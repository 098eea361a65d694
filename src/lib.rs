//! # Crest DSP
//!
//! A spectral analysis engine for audio files: decode a file, reduce it to
//! a single analysis channel, compute its frequency spectrum, and report
//! the dominant spectral magnitude together with the stream metadata.
//!
//! ## Features
//!
//! - **Decoding**: Whole-file decode of any format Symphonia can probe
//!   (WAV, FLAC, OGG/Vorbis, MP3, AAC/MP4) into one interleaved buffer
//! - **Downmixing**: Per-frame arithmetic mean with double-precision
//!   accumulation; mono input passes through bit-for-bit
//! - **Spectral peak detection**: Un-normalized forward FFT with no
//!   windowing, magnitude scan over the non-mirrored half of the spectrum
//! - **Busy-state notifications**: `started`/`finished` observer hooks
//!   paired on every run, for hosts that show a wait indicator
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use crest_dsp::analyze_file;
//!
//! let report = analyze_file(Path::new("track.flac"))?;
//! println!("{}", report);
//! # Ok::<(), crest_dsp::PipelineError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline runs synchronously, one stage at a time:
//!
//! ```text
//! File → Decode → Downmix → Forward FFT → Magnitude Scan → Report
//! ```
//!
//! Streams with more than two channels are rejected before any sample data
//! is read, and an empty stream is rejected before the transform stage.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

// Re-export main types
pub use analysis::pipeline::{AnalysisObserver, NullObserver, Pipeline};
pub use analysis::result::{Report, ReportMetadata};
pub use error::{DecodeError, PipelineError};
pub use features::spectrum::{SpectralPeak, SpectrumResult};
pub use io::decoder::{AudioStreamInfo, DecodedAudio};

/// Analyze one audio file with a default pipeline
///
/// Convenience wrapper over [`Pipeline`] for hosts that need no busy-state
/// notifications.
///
/// # Arguments
///
/// * `path` - Path to the audio file to analyze
///
/// # Returns
///
/// The assembled [`Report`]: stream metadata plus the spectral peak
///
/// # Errors
///
/// Returns [`PipelineError`] if the file cannot be opened or decoded, has
/// an unsupported channel layout, or contains no sample frames
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use crest_dsp::analyze_file;
///
/// let report = analyze_file(Path::new("tone.wav"))?;
/// println!("peak magnitude: {:.3}", report.spectrum.peak_magnitude());
/// # Ok::<(), crest_dsp::PipelineError>(())
/// ```
pub fn analyze_file(path: &std::path::Path) -> Result<Report, PipelineError> {
    let mut pipeline = Pipeline::new();
    pipeline.run(path)
}
