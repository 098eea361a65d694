//! Analysis report types
//!
//! The [`Report`] bundles the decoded stream metadata with the spectral
//! peak and renders the plain-text summary hosts display or log. All types
//! serialize with serde so reports can be persisted or shipped as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::spectrum::SpectrumResult;
use crate::io::decoder::AudioStreamInfo;

/// Complete result of analyzing one audio file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Metadata of the decoded stream
    pub stream: AudioStreamInfo,

    /// Spectral analysis of the downmixed signal
    pub spectrum: SpectrumResult,

    /// Run metadata
    pub metadata: ReportMetadata,
}

/// Metadata about one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Audio duration in seconds
    pub duration_seconds: f32,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,
}

impl fmt::Display for Report {
    /// Renders the report as newline-separated `key: value` lines followed
    /// by the `max magnitude found` summary line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frames: {}", self.stream.frames)?;
        writeln!(f, "sample rate: {}", self.stream.sample_rate)?;
        writeln!(f, "channels: {}", self.stream.channels)?;
        writeln!(f, "sections: {}", self.stream.sections)?;
        writeln!(f, "seekable: {}", self.stream.seekable)?;
        match self.spectrum.peak {
            Some(peak) => write!(
                f,
                "max magnitude found: {:.6} at {:.2} Hz (bin {})",
                peak.magnitude, peak.frequency_hz, peak.bin
            ),
            None => write!(f, "max magnitude found: none (stream too short for spectral analysis)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::spectrum::SpectralPeak;

    fn stream_info() -> AudioStreamInfo {
        AudioStreamInfo {
            frames: 44100,
            sample_rate: 44100,
            channels: 2,
            sections: 1,
            seekable: true,
        }
    }

    #[test]
    fn test_report_renders_stream_fields() {
        let report = Report {
            stream: stream_info(),
            spectrum: SpectrumResult {
                sample_count: 44100,
                peak: Some(SpectralPeak {
                    bin: 441,
                    frequency_hz: 441.0,
                    magnitude: 22050.0,
                }),
            },
            metadata: ReportMetadata {
                duration_seconds: 1.0,
                processing_time_ms: 3.5,
            },
        };

        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "frames: 44100");
        assert_eq!(lines[1], "sample rate: 44100");
        assert_eq!(lines[2], "channels: 2");
        assert_eq!(lines[3], "sections: 1");
        assert_eq!(lines[4], "seekable: true");
        assert_eq!(lines[5], "max magnitude found: 22050.000000 at 441.00 Hz (bin 441)");
    }

    #[test]
    fn test_report_renders_missing_peak() {
        let report = Report {
            stream: AudioStreamInfo {
                frames: 1,
                sample_rate: 8000,
                channels: 1,
                sections: 1,
                seekable: false,
            },
            spectrum: SpectrumResult {
                sample_count: 1,
                peak: None,
            },
            metadata: ReportMetadata {
                duration_seconds: 0.000125,
                processing_time_ms: 0.1,
            },
        };

        let text = report.to_string();
        assert!(text.contains("seekable: false"));
        assert!(text.contains("max magnitude found: none"));
    }
}
