//! Source wavelet synthesis.
//!
//! Two closed-form wavelet families are supported:
//! - Ricker: single peak-frequency parameter
//! - Ormsby: four corner frequencies defining a trapezoidal band
//!
//! Both are sampled on the symmetric time axis `t[k] = -duration/2 + k*dt`
//! and normalized so the peak absolute amplitude is exactly 1.

mod ormsby;
mod ricker;
pub mod spectrum;

pub use spectrum::{amplitude_spectrum, AmplitudeSpectrum};

use crate::error::WedgeError;

/// A validated wavelet parameterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WaveletSpec {
    /// Ricker wavelet with the given peak frequency (Hz).
    Ricker { f: f64 },
    /// Ormsby wavelet with corner frequencies `f1 < f2 < f3 < f4` (Hz).
    Ormsby { corners: [f64; 4] },
}

impl WaveletSpec {
    /// Validated Ricker parameterization.
    pub fn ricker(f: f64) -> Result<Self, WedgeError> {
        check_frequency("Ricker frequency", f)?;
        Ok(WaveletSpec::Ricker { f })
    }

    /// Validated Ormsby parameterization.
    ///
    /// Corners must be non-negative and strictly increasing; equal adjacent
    /// corners would put a zero in the coefficient denominators.
    pub fn ormsby(corners: [f64; 4]) -> Result<Self, WedgeError> {
        for &f in &corners {
            check_frequency("Ormsby corner frequency", f)?;
        }
        if !(corners[0] < corners[1] && corners[1] < corners[2] && corners[2] < corners[3]) {
            return Err(WedgeError::CornerOrder { corners });
        }
        Ok(WaveletSpec::Ormsby { corners })
    }

    /// Build a spec from a raw frequency list: one value selects Ricker,
    /// four select Ormsby. Any other arity is a shape error.
    pub fn from_params(freqs: &[f64]) -> Result<Self, WedgeError> {
        match freqs.len() {
            1 => Self::ricker(freqs[0]),
            4 => Self::ormsby([freqs[0], freqs[1], freqs[2], freqs[3]]),
            n => Err(WedgeError::ShapeMismatch {
                what: "wavelet frequencies",
                expected: 1,
                actual: n,
            }),
        }
    }

    /// Characteristic frequency used for the theoretical tuning metrics.
    ///
    /// Ricker: the peak frequency itself. Ormsby: the mean of the outer
    /// corners `(f1 + f4) / 2`.
    #[inline]
    pub fn central_frequency(&self) -> f64 {
        match *self {
            WaveletSpec::Ricker { f } => f,
            WaveletSpec::Ormsby { corners } => (corners[0] + corners[3]) / 2.0,
        }
    }
}

fn check_frequency(what: &'static str, f: f64) -> Result<(), WedgeError> {
    if !f.is_finite() {
        return Err(WedgeError::NonFinite { what, value: f });
    }
    if f < 0.0 {
        return Err(WedgeError::NegativeFrequency { what, value: f });
    }
    Ok(())
}

/// Synthesize a wavelet of `floor(duration / dt)` samples.
///
/// The result is normalized so that `max(|w|) == 1`.
pub fn wavelet(duration: f64, dt: f64, spec: &WaveletSpec) -> Result<Vec<f64>, WedgeError> {
    for (what, value) in [("wavelet duration", duration), ("sample interval", dt)] {
        if !value.is_finite() {
            return Err(WedgeError::NonFinite { what, value });
        }
        if value <= 0.0 {
            return Err(WedgeError::NonPositive { what, value });
        }
    }
    let n = (duration / dt) as usize;
    if n == 0 {
        return Err(WedgeError::EmptyWavelet { duration, dt });
    }

    let t: Vec<f64> = (0..n).map(|k| -duration / 2.0 + k as f64 * dt).collect();
    let mut w = match *spec {
        WaveletSpec::Ricker { f } => ricker::evaluate(&t, f),
        WaveletSpec::Ormsby { corners } => ormsby::evaluate(&t, corners),
    };

    let peak = w.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()));
    for x in &mut w {
        *x /= peak;
    }
    Ok(w)
}
