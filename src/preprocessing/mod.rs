//! Audio preprocessing modules
//!
//! Prepares decoded audio for spectral analysis:
//! - Channel mixing (interleaved multi-channel to mono)

pub mod channel_mixer;
