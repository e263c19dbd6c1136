//! Extraction of tuning diagnostics from the synthetic section.
//!
//! All thicknesses are reported in milliseconds of two-way time. Thickness
//! arrays are truncated to whole milliseconds, matching how they are read
//! off against the sample-aligned wedge ramp; scalar picks stay fractional.

use faer::Mat;

use crate::types::Polarity;

/// True wedge thickness per trace in ms: a linear ramp `j * dt * 1000`,
/// truncated to whole milliseconds.
pub fn wedge_thickness(n_traces: usize, dt: f64) -> Vec<i64> {
    let step_ms = dt * 1000.0;
    (0..n_traces).map(|j| (j as f64 * step_ms) as i64).collect()
}

/// Apparent (measured) wedge thickness per trace in ms.
///
/// For each trace, the top and base reflections are picked as the
/// polarity-consistent extremum pair; their separation in samples scales to
/// milliseconds. Trace 0 has a zero-thickness wedge and no resolvable pair,
/// so its value is projected from trace 1.
pub fn apparent_wedge_thickness(synth: &Mat<f64>, dt: f64, polarity: Polarity) -> Vec<i64> {
    let mut apparent: Vec<i64> = (0..synth.ncols())
        .map(|j| {
            let top = polarity.top_row(synth, j) as i64;
            let base = polarity.base_row(synth, j) as i64;
            ((base - top) as f64 * dt * 1000.0) as i64
        })
        .collect();
    if apparent.len() > 1 {
        apparent[0] = apparent[1];
    }
    apparent
}

/// Measured tuning thickness in ms: the thickness at which the top-of-wedge
/// amplitude is largest.
///
/// The top-reflector row is picked from the last (thickest) trace, where the
/// top and base reflections are fully separated; the tuning trace is then
/// the column of maximum absolute amplitude along that row.
pub fn measured_tuning_thickness(synth: &Mat<f64>, dt: f64, polarity: Polarity) -> f64 {
    let top_idx = polarity.top_row(synth, synth.ncols() - 1);
    let tuning_col = argmax_abs_row(synth, top_idx);
    tuning_col as f64 * dt * 1000.0
}

/// Trace index at which true and apparent thickness last diverge, plus one.
///
/// Scanning from thick to thin, the onset of tuning is the first trace where
/// the apparent thickness stops tracking the true thickness. Returns `None`
/// when no in-range divergence exists, which happens when the wedge never
/// thins enough relative to the wavelet (low frequency, small `dt`).
pub fn onset_divergence_index(thickness: &[i64], apparent: &[i64]) -> Option<usize> {
    debug_assert_eq!(thickness.len(), apparent.len());
    let last_divergent = thickness
        .iter()
        .zip(apparent.iter())
        .rposition(|(&dz, &app)| dz - app > 0)?;
    let onset = last_divergent + 1;
    (onset < apparent.len()).then_some(onset)
}

/// Measured onset-of-tuning thickness in ms.
///
/// Maps the divergence index through the apparent-thickness array; when the
/// search finds no divergence the theoretical onset `1000 / f_central` is
/// substituted.
pub fn measured_onset_tuning_thickness(
    thickness: &[i64],
    apparent: &[i64],
    f_central: f64,
) -> f64 {
    match onset_divergence_index(thickness, apparent) {
        Some(idx) => apparent[idx] as f64,
        None => theoretical_onset_tuning_thickness(f_central),
    }
}

/// Theoretical onset of tuning in ms: one wavelet period, `1000 / f_central`.
#[inline]
pub fn theoretical_onset_tuning_thickness(f_central: f64) -> f64 {
    1.0 / f_central * 1000.0
}

/// Theoretical tuning thickness in ms: half a period.
#[inline]
pub fn theoretical_tuning_thickness(f_central: f64) -> f64 {
    theoretical_onset_tuning_thickness(f_central) / 2.0
}

/// Theoretical resolution limit in ms: a quarter period.
#[inline]
pub fn theoretical_resolution_limit(f_central: f64) -> f64 {
    theoretical_onset_tuning_thickness(f_central) / 4.0
}

/// Absolute amplitude along the top of the wedge, one value per trace.
///
/// The row is fixed from the last trace's top pick; this is the
/// amplitude-versus-thickness curve of the tuning-curve plot.
pub fn tuning_curve_amplitude(synth: &Mat<f64>, polarity: Polarity) -> Vec<f64> {
    let top_idx = polarity.top_row(synth, synth.ncols() - 1);
    (0..synth.ncols()).map(|j| synth[(top_idx, j)].abs()).collect()
}

/// Column index of maximum absolute value along one row (first on ties).
fn argmax_abs_row(m: &Mat<f64>, row: usize) -> usize {
    let mut best = 0;
    for j in 1..m.ncols() {
        if m[(row, j)].abs() > m[(row, best)].abs() {
            best = j;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_thickness_ramp() {
        let z = wedge_thickness(101, 0.001);
        assert_eq!(z.len(), 101);
        assert_eq!(z[0], 0);
        for j in 1..z.len() {
            assert_eq!(z[j] - z[j - 1], 1);
        }
        assert_eq!(z[100], 100);
    }

    #[test]
    fn test_wedge_thickness_coarser_sampling() {
        let z = wedge_thickness(101, 0.004);
        assert_eq!(z[1], 4);
        assert_eq!(z[100], 400);
    }

    #[test]
    fn test_apparent_thickness_projection_rule() {
        // Two reflections 10 samples apart in every trace except trace 0,
        // which has a degenerate single extremum.
        let mut synth = Mat::<f64>::zeros(60, 4);
        synth[(20, 0)] = -1.0;
        for j in 1..4 {
            synth[(20, j)] = -1.0;
            synth[(30, j)] = 1.0;
        }
        let apparent = apparent_wedge_thickness(&synth, 0.001, Polarity::Trough);
        assert_eq!(apparent[1], 10);
        assert_eq!(apparent[2], 10);
        assert_eq!(apparent[0], apparent[1]);
    }

    #[test]
    fn test_measured_tuning_picks_peak_amplitude_column() {
        // Top reflector on row 20 everywhere; amplitude builds to a maximum
        // at column 2 and decays toward the thick end.
        let mut synth = Mat::<f64>::zeros(60, 6);
        let amps = [-1.0, -1.2, -1.5, -1.3, -1.1, -1.0];
        for (j, &a) in amps.iter().enumerate() {
            synth[(20, j)] = a;
        }
        let z_tuning = measured_tuning_thickness(&synth, 0.001, Polarity::Trough);
        assert_eq!(z_tuning, 2.0);
    }

    #[test]
    fn test_onset_divergence_found() {
        let thickness = vec![0, 1, 2, 3, 4, 5, 6];
        let apparent = vec![3, 3, 3, 3, 3, 5, 6];
        // Last divergent index is 4 (4 > 3); onset is 5.
        assert_eq!(onset_divergence_index(&thickness, &apparent), Some(5));
        assert_eq!(
            measured_onset_tuning_thickness(&thickness, &apparent, 30.0),
            5.0
        );
    }

    #[test]
    fn test_onset_divergence_missing_falls_back() {
        // Apparent never below true: no divergence anywhere.
        let thickness = vec![0, 1, 2, 3];
        let apparent = vec![2, 2, 2, 3];
        assert_eq!(onset_divergence_index(&thickness, &apparent), None);
        assert_eq!(
            measured_onset_tuning_thickness(&thickness, &apparent, 10.0),
            100.0
        );
    }

    #[test]
    fn test_onset_divergence_at_last_index_falls_back() {
        // Divergence persists through the thickest trace: index would run
        // off the end, so the theoretical value is substituted.
        let thickness = vec![0, 1, 2, 3];
        let apparent = vec![0, 0, 0, 0];
        assert_eq!(onset_divergence_index(&thickness, &apparent), None);
        assert_eq!(
            measured_onset_tuning_thickness(&thickness, &apparent, 25.0),
            40.0
        );
    }

    #[test]
    fn test_theoretical_scalars() {
        assert_eq!(theoretical_onset_tuning_thickness(30.0), 1000.0 / 30.0);
        assert_eq!(theoretical_tuning_thickness(30.0), 1000.0 / 30.0 / 2.0);
        assert_eq!(theoretical_resolution_limit(30.0), 1000.0 / 30.0 / 4.0);
    }

    #[test]
    fn test_tuning_curve_amplitude_fixed_row() {
        let mut synth = Mat::<f64>::zeros(10, 3);
        synth[(4, 0)] = 0.2;
        synth[(4, 1)] = -0.7;
        synth[(4, 2)] = 1.0; // peak pick in the last trace fixes row 4
        let amp = tuning_curve_amplitude(&synth, Polarity::Peak);
        assert_eq!(amp, vec![0.2, 0.7, 1.0]);
    }
}
