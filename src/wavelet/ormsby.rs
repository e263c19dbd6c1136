//! Ormsby wavelet evaluation.

use std::f64::consts::PI;

/// Normalized sinc: `sin(pi x) / (pi x)`, 1 at x = 0.
#[inline]
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Evaluate an unnormalized Ormsby wavelet on the given time axis.
///
/// The wavelet is the difference of two band-limited-sinc pairs, one for the
/// high-cut ramp (f3, f4) and one for the low-cut ramp (f1, f2). The caller
/// guarantees strictly increasing corners, so the ramp widths in the
/// denominators are nonzero.
pub(crate) fn evaluate(t: &[f64], corners: [f64; 4]) -> Vec<f64> {
    let [f1, f2, f3, f4] = corners;
    let a = (PI * f4).powi(2) / (PI * f4 - PI * f3);
    let b = (PI * f3).powi(2) / (PI * f4 - PI * f3);
    let c = (PI * f2).powi(2) / (PI * f2 - PI * f1);
    let d = (PI * f1).powi(2) / (PI * f2 - PI * f1);

    t.iter()
        .map(|&t| {
            let high = a * sinc(f4 * t).powi(2) - b * sinc(f3 * t).powi(2);
            let low = c * sinc(f2 * t).powi(2) - d * sinc(f1 * t).powi(2);
            high - low
        })
        .collect()
}
