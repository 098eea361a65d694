//! Spectral peak detection via forward FFT
//!
//! Computes the discrete frequency spectrum of a mono signal and reports
//! the bin with the largest magnitude. The transform is deliberately raw:
//! no window, no detrending, no zero-padding, no output normalization.
//! Magnitudes therefore scale with both signal amplitude and length, which
//! is the documented contract of [`SpectralPeak::magnitude`].
//!
//! # Algorithm
//!
//! 1. Widen the real signal to complex (imaginary part zero)
//! 2. Run one N-point forward FFT
//! 3. Take the Euclidean magnitude of each bin in `[0, N/2)` — for real
//!    input the upper half mirrors the lower by conjugate symmetry
//! 4. Scan the bins in increasing order, keeping the first bin that attains
//!    the maximum magnitude (strict greater-than comparison)
//!
//! # Example
//!
//! ```
//! use crest_dsp::features::spectrum::analyze_spectrum;
//!
//! // One full cycle over four samples at 4 Hz
//! let result = analyze_spectrum(&[1.0, 0.0, -1.0, 0.0], 4);
//! let peak = result.peak.unwrap();
//! assert_eq!(peak.bin, 1);
//! assert_eq!(peak.frequency_hz, 1.0);
//! ```

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

/// The dominant spectral component of an analyzed signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralPeak {
    /// Bin index in `[0, N/2)` where the maximum magnitude occurs.
    /// Ties resolve to the lowest index.
    pub bin: usize,

    /// Center frequency of the peak bin: `bin * sample_rate / N`
    pub frequency_hz: f32,

    /// Un-normalized magnitude `sqrt(re² + im²)` at the peak bin.
    /// Scales with signal amplitude and length.
    pub magnitude: f32,
}

/// Result of spectral analysis over one mono signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumResult {
    /// Number of input samples (the transform length N)
    pub sample_count: usize,

    /// The dominant spectral component, or `None` when the signal is too
    /// short to have any examinable bin (N < 2)
    pub peak: Option<SpectralPeak>,
}

impl SpectrumResult {
    /// Peak magnitude, or 0.0 when no peak exists
    pub fn peak_magnitude(&self) -> f32 {
        self.peak.map(|p| p.magnitude).unwrap_or(0.0)
    }
}

/// Compute the frequency spectrum of a mono signal and locate its peak
///
/// Runs a single un-normalized forward FFT over the whole signal and scans
/// bins `[0, N/2)` for the largest magnitude. The signal is taken as-is:
/// callers wanting windowing or detrending apply it themselves.
///
/// Empty input never reaches this stage in the pipeline (it is rejected as
/// an empty signal beforehand), but the function is total: for `N < 2`
/// there is no examinable bin and `peak` is `None`.
///
/// # Arguments
///
/// * `signal` - Mono samples; the transform length is `signal.len()`
/// * `sample_rate` - Sample rate in Hz, used to map bins to frequencies
///
/// # Returns
///
/// The transform length and the dominant spectral component
pub fn analyze_spectrum(signal: &[f32], sample_rate: u32) -> SpectrumResult {
    let n = signal.len();
    if n < 2 {
        return SpectrumResult {
            sample_count: n,
            peak: None,
        };
    }

    log::debug!(
        "Computing {}-point spectrum at {} Hz ({:.6} Hz per bin)",
        n,
        sample_rate,
        sample_rate as f32 / n as f32
    );

    let mut buffer: Vec<Complex<f32>> = signal.iter().map(|&s| Complex::new(s, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let magnitudes: Vec<f32> = buffer.iter().take(n / 2).map(|x| x.norm()).collect();

    let peak = scan_peak(&magnitudes).map(|(bin, magnitude)| SpectralPeak {
        bin,
        frequency_hz: bin as f32 * sample_rate as f32 / n as f32,
        magnitude,
    });

    if let Some(p) = peak {
        log::debug!(
            "Peak magnitude {:.6} at bin {} ({:.2} Hz)",
            p.magnitude,
            p.bin,
            p.frequency_hz
        );
    }

    SpectrumResult {
        sample_count: n,
        peak,
    }
}

/// Find the first bin attaining the maximum magnitude
///
/// Strict greater-than comparison during a left-to-right scan, so equal
/// magnitudes resolve to the lowest bin index.
fn scan_peak(magnitudes: &[f32]) -> Option<(usize, f32)> {
    let mut peak: Option<(usize, f32)> = None;
    for (bin, &magnitude) in magnitudes.iter().enumerate() {
        match peak {
            Some((_, best)) if magnitude <= best => {}
            _ => peak = Some((bin, magnitude)),
        }
    }
    peak
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sine at exactly `cycles` full periods over `n` samples, so all
    /// energy lands in one bin with no leakage
    fn tone(n: usize, cycles: usize) -> Vec<f32> {
        (0..n)
            .map(|i| (2.0 * std::f32::consts::PI * cycles as f32 * i as f32 / n as f32).sin())
            .collect()
    }

    #[test]
    fn test_four_sample_reference_signal() {
        let result = analyze_spectrum(&[1.0, 0.0, -1.0, 0.0], 4);
        assert_eq!(result.sample_count, 4);

        let peak = result.peak.unwrap();
        assert_eq!(peak.bin, 1);
        assert_eq!(peak.frequency_hz, 1.0);
        assert_eq!(peak.magnitude, 2.0);
    }

    #[test]
    fn test_pure_tone_lands_in_expected_bin() {
        let n = 1024;
        let sample_rate = 44100;
        let result = analyze_spectrum(&tone(n, 100), sample_rate);

        let peak = result.peak.unwrap();
        assert_eq!(peak.bin, 100);

        // Un-normalized N-point transform of a unit sine: magnitude N/2
        assert!(
            (peak.magnitude - n as f32 / 2.0).abs() < 1.0,
            "Expected magnitude near {}, got {}",
            n / 2,
            peak.magnitude
        );

        let expected_hz = 100.0 * sample_rate as f32 / n as f32;
        assert!((peak.frequency_hz - expected_hz).abs() < 1e-3);
    }

    #[test]
    fn test_silent_signal_peaks_at_dc_with_zero_magnitude() {
        let silence = vec![0.0f32; 256];
        let result = analyze_spectrum(&silence, 44100);

        let peak = result.peak.unwrap();
        assert_eq!(peak.bin, 0);
        assert_eq!(peak.magnitude, 0.0);
    }

    #[test]
    fn test_dc_signal_peaks_at_bin_zero() {
        let dc = vec![1.0f32; 64];
        let result = analyze_spectrum(&dc, 8000);

        let peak = result.peak.unwrap();
        assert_eq!(peak.bin, 0);
        assert!((peak.magnitude - 64.0).abs() < 1e-3);
        assert_eq!(peak.frequency_hz, 0.0);
    }

    #[test]
    fn test_single_sample_has_no_peak() {
        let result = analyze_spectrum(&[0.5], 44100);
        assert_eq!(result.sample_count, 1);
        assert!(result.peak.is_none());
        assert_eq!(result.peak_magnitude(), 0.0);
    }

    #[test]
    fn test_empty_signal_has_no_peak() {
        let result = analyze_spectrum(&[], 44100);
        assert_eq!(result.sample_count, 0);
        assert!(result.peak.is_none());
    }

    #[test]
    fn test_peak_bin_stays_below_nyquist() {
        // Tone one bin under Nyquist: the mirror lands at N/2 + 1, the
        // scanned half must still see bin N/2 - 1
        let n = 1024;
        let result = analyze_spectrum(&tone(n, 511), 44100);
        assert_eq!(result.peak.unwrap().bin, 511);
    }

    #[test]
    fn test_nyquist_bin_is_excluded() {
        // cos(pi*i) puts all energy exactly at bin N/2, outside the scanned
        // range; the remaining bins are numerically silent
        let n = 8;
        let signal: Vec<f32> = (0..n).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let result = analyze_spectrum(&signal, 8);

        let peak = result.peak.unwrap();
        assert_eq!(peak.bin, 0);
        assert!(peak.magnitude < 1e-3);
    }

    #[test]
    fn test_scan_peak_tie_breaks_to_lowest_bin() {
        assert_eq!(scan_peak(&[3.0, 5.0, 5.0, 1.0]), Some((1, 5.0)));
    }

    #[test]
    fn test_scan_peak_empty() {
        assert_eq!(scan_peak(&[]), None);
    }
}
