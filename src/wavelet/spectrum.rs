//! One-sided amplitude spectrum of a sampled wavelet.
//!
//! Used by display layers to show the frequency content of a synthesized
//! wavelet next to the tuning curve. Amplitudes are reported in dB relative
//! to the spectral peak; phase comes from the complex bins.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// One-sided discrete spectrum of a real signal.
#[derive(Clone, Debug)]
pub struct AmplitudeSpectrum {
    /// Bin frequencies in Hz, 0 through Nyquist.
    pub freqs: Vec<f64>,
    /// Amplitude per bin in dB relative to the peak bin (peak = 0 dB).
    pub amplitude_db: Vec<f64>,
    /// Phase per bin in degrees, in (-180, 180].
    pub phase_deg: Vec<f64>,
    /// Nyquist frequency `1 / (2 dt)` in Hz.
    pub nyquist: f64,
}

/// Compute the one-sided amplitude spectrum of `w` sampled at interval `dt`.
///
/// # Panics
///
/// Panics if `w` is empty or `dt` is not strictly positive; both indicate a
/// programming error since wavelets are synthesized with validated sampling.
pub fn amplitude_spectrum(w: &[f64], dt: f64) -> AmplitudeSpectrum {
    assert!(!w.is_empty(), "spectrum of an empty signal");
    assert!(dt > 0.0, "sample interval must be positive, got {}", dt);

    let n = w.len();
    let mut buf: Vec<Complex<f64>> = w.iter().map(|&x| Complex::new(x, 0.0)).collect();
    FftPlanner::new().plan_fft_forward(n).process(&mut buf);

    // Real input: keep bins 0..=n/2.
    let n_bins = n / 2 + 1;
    let magnitude: Vec<f64> = buf[..n_bins].iter().map(|c| c.norm()).collect();
    let peak = magnitude.iter().fold(0.0_f64, |acc, &x| acc.max(x));
    assert!(peak > 0.0, "spectrum of an all-zero signal");

    let amplitude_db = magnitude.iter().map(|&a| 20.0 * (a / peak).log10()).collect();
    let phase_deg = buf[..n_bins].iter().map(|c| c.arg().to_degrees()).collect();
    let freqs = (0..n_bins).map(|k| k as f64 / (n as f64 * dt)).collect();

    AmplitudeSpectrum {
        freqs,
        amplitude_db,
        phase_deg,
        nyquist: 1.0 / (2.0 * dt),
    }
}
