//! Ricker wavelet evaluation.

use std::f64::consts::PI;

/// Evaluate an unnormalized Ricker wavelet on the given time axis.
///
/// The user-facing parameter is the peak frequency; it is converted to the
/// central frequency `fc = f / (pi / sqrt(6))` before evaluation so that the
/// wavelet period matches the frequency the tuning metrics are quoted
/// against.
pub(crate) fn evaluate(t: &[f64], f_peak: f64) -> Vec<f64> {
    let fc = f_peak / (PI / 6.0_f64.sqrt());
    t.iter()
        .map(|&t| {
            let u = PI * PI * fc * fc * t * t;
            (1.0 - 2.0 * u) * (-u).exp()
        })
        .collect()
}
