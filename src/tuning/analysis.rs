//! Full wedge-modeling pipeline.
//!
//! One call takes the validated inputs a form layer collects (six rock
//! properties, wavelet duration/interval/spec) and produces everything the
//! display layer renders: the earth model, the wavelet, the synthetic
//! section, and the derived tuning metrics.

use faer::Mat;

use crate::error::WedgeError;
use crate::model::{earth_model, EarthModel};
use crate::synthetic::tuning_wedge;
use crate::tuning::metrics;
use crate::types::{LayerStack, Polarity};
use crate::wavelet::{wavelet, WaveletSpec};

/// Scalar and per-trace tuning diagnostics for one modeling run.
#[derive(Clone, Debug)]
pub struct TuningMetrics {
    /// Characteristic wavelet frequency (Hz) the theoretical values use.
    pub f_central: f64,
    /// True wedge thickness per trace (ms).
    pub thickness_ms: Vec<i64>,
    /// Apparent wedge thickness per trace (ms).
    pub apparent_thickness_ms: Vec<i64>,
    /// Measured tuning thickness (ms).
    pub measured_tuning_ms: f64,
    /// Measured onset of tuning (ms); theoretical fallback when the wedge
    /// range shows no divergence.
    pub measured_onset_ms: f64,
    /// Theoretical onset of tuning (ms).
    pub theoretical_onset_ms: f64,
    /// Theoretical tuning thickness (ms).
    pub theoretical_tuning_ms: f64,
    /// Theoretical resolution limit (ms).
    pub resolution_limit_ms: f64,
    /// Absolute amplitude along the top of the wedge, per trace.
    pub amplitude: Vec<f64>,
}

/// Result of a complete wedge-modeling run.
#[derive(Clone, Debug)]
pub struct TuningAnalysis {
    /// Layer acoustic impedances, top to base.
    pub impedances: [f64; 3],
    /// Polarity convention applied to every extremum pick.
    pub polarity: Polarity,
    /// Earth model (reflection coefficients and impedance grid).
    pub model: EarthModel,
    /// Sampled, normalized source wavelet.
    pub wavelet: Vec<f64>,
    /// Synthetic wedge section.
    pub synth: Mat<f64>,
    /// Derived tuning diagnostics.
    pub metrics: TuningMetrics,
}

impl TuningAnalysis {
    /// Run the full pipeline for one set of inputs.
    pub fn run(
        stack: &LayerStack,
        duration: f64,
        dt: f64,
        spec: &WaveletSpec,
    ) -> Result<Self, WedgeError> {
        let impedances = stack.impedances();
        let polarity = stack.polarity();
        let model = earth_model(stack);
        let w = wavelet(duration, dt, spec)?;
        let synth = tuning_wedge(&model.rc, &w);

        let f_central = spec.central_frequency();
        let thickness_ms = metrics::wedge_thickness(synth.ncols(), dt);
        let apparent_thickness_ms = metrics::apparent_wedge_thickness(&synth, dt, polarity);
        let measured_tuning_ms = metrics::measured_tuning_thickness(&synth, dt, polarity);
        let measured_onset_ms = metrics::measured_onset_tuning_thickness(
            &thickness_ms,
            &apparent_thickness_ms,
            f_central,
        );
        let amplitude = metrics::tuning_curve_amplitude(&synth, polarity);

        let metrics = TuningMetrics {
            f_central,
            thickness_ms,
            apparent_thickness_ms,
            measured_tuning_ms,
            measured_onset_ms,
            theoretical_onset_ms: metrics::theoretical_onset_tuning_thickness(f_central),
            theoretical_tuning_ms: metrics::theoretical_tuning_thickness(f_central),
            resolution_limit_ms: metrics::theoretical_resolution_limit(f_central),
            amplitude,
        };

        Ok(Self {
            impedances,
            polarity,
            model,
            wavelet: w,
            synth,
            metrics,
        })
    }
}
