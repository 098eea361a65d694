//! Error types for the spectral analysis pipeline

use std::fmt;

/// Errors that can occur while opening and decoding an audio file
#[derive(Debug, Clone)]
pub enum DecodeError {
    /// The codec library could not open, probe, or decode the file.
    /// Carries the underlying diagnostic message.
    OpenFailed(String),

    /// The stream declares a channel count other than 1 (mono) or 2 (stereo).
    /// Carries the channel count the stream reported.
    UnsupportedChannelLayout(u32),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::OpenFailed(msg) => write!(f, "Failed to open audio file: {}", msg),
            DecodeError::UnsupportedChannelLayout(n) => {
                write!(f, "Unsupported channel layout: {} channels (expected 1 or 2)", n)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors surfaced by a full pipeline run
#[derive(Debug, Clone)]
pub enum PipelineError {
    /// The file could not be opened or decoded
    OpenFailed(String),

    /// The stream has a channel count other than 1 or 2
    UnsupportedChannelLayout(u32),

    /// The decoded stream contains zero sample frames
    EmptySignal,

    /// The spectral transform stage failed. Reserved for allocation or
    /// execution failures in the transform backend; not produced during
    /// normal operation.
    AnalysisFailure(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::OpenFailed(msg) => write!(f, "Failed to open audio file: {}", msg),
            PipelineError::UnsupportedChannelLayout(n) => {
                write!(f, "Unsupported channel layout: {} channels (expected 1 or 2)", n)
            }
            PipelineError::EmptySignal => write!(f, "Audio stream contains no sample frames"),
            PipelineError::AnalysisFailure(msg) => write!(f, "Spectral analysis failed: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<DecodeError> for PipelineError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::OpenFailed(msg) => PipelineError::OpenFailed(msg),
            DecodeError::UnsupportedChannelLayout(n) => PipelineError::UnsupportedChannelLayout(n),
        }
    }
}
