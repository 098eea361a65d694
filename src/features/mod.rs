//! Feature extraction modules
//!
//! Spectral analysis of the downmixed signal:
//! - Forward FFT, magnitude extraction, and peak detection

pub mod spectrum;
