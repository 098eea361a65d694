//! Audio I/O modules
//!
//! Audio decoding into interleaved PCM buffers using Symphonia.

pub mod decoder;
