//! Per-trace convolution of reflectivity with the source wavelet.
//!
//! Each trace of the reflection-coefficient grid is convolved independently
//! with the wavelet, so the section computes column by column with no
//! ordering dependency between columns.

use faer::Mat;

/// Linear convolution cropped to the centered window of the longer input.
///
/// Matches "same"-mode convolution: the output has `max(x.len(), w.len())`
/// samples, taken from the center of the full convolution.
///
/// # Panics
///
/// Panics if either input is empty.
pub fn convolve_same(x: &[f64], w: &[f64]) -> Vec<f64> {
    assert!(!x.is_empty() && !w.is_empty(), "convolution of empty input");
    let n = x.len();
    let m = w.len();
    let out_len = n.max(m);
    let start = (n.min(m) - 1) / 2;

    let mut out = vec![0.0; out_len];
    for (idx, sample) in out.iter_mut().enumerate() {
        // Full-convolution index of this output sample.
        let k = idx + start;
        // y[k] = sum over i of x[i] * w[k - i], with both indices in range.
        let i_lo = k.saturating_sub(m - 1);
        let i_hi = k.min(n - 1);
        let mut acc = 0.0;
        for i in i_lo..=i_hi {
            acc += x[i] * w[k - i];
        }
        *sample = acc;
    }
    out
}

/// Convolve every trace of `rc` with the wavelet `w`.
///
/// The output keeps the trace count of `rc` and has
/// `max(rc.nrows(), w.len())` rows, following the per-trace "same"
/// convolution window.
pub fn tuning_wedge(rc: &Mat<f64>, w: &[f64]) -> Mat<f64> {
    let n_rows = rc.nrows().max(w.len());
    let mut synth = Mat::<f64>::zeros(n_rows, rc.ncols());
    let mut trace = vec![0.0; rc.nrows()];
    for j in 0..rc.ncols() {
        for (i, sample) in trace.iter_mut().enumerate() {
            *sample = rc[(i, j)];
        }
        let conv = convolve_same(&trace, w);
        for (i, &value) in conv.iter().enumerate() {
            synth[(i, j)] = value;
        }
    }
    synth
}

/// Column-parallel variant of [`tuning_wedge`].
#[cfg(feature = "parallel")]
pub fn tuning_wedge_parallel(rc: &Mat<f64>, w: &[f64]) -> Mat<f64> {
    use rayon::prelude::*;

    let n_rows = rc.nrows().max(w.len());
    let columns: Vec<Vec<f64>> = (0..rc.ncols())
        .into_par_iter()
        .map(|j| {
            let trace: Vec<f64> = (0..rc.nrows()).map(|i| rc[(i, j)]).collect();
            convolve_same(&trace, w)
        })
        .collect();

    let mut synth = Mat::<f64>::zeros(n_rows, rc.ncols());
    for (j, conv) in columns.iter().enumerate() {
        for (i, &value) in conv.iter().enumerate() {
            synth[(i, j)] = value;
        }
    }
    synth
}
