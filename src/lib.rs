//! # wedge-rs
//!
//! Seismic tuning-wedge modeling for thin-bed interpretation.
//!
//! This crate provides the numerical core of a tuning-wedge calculator:
//! - Three-layer rock column with validated velocity/density inputs
//! - Wedge earth model (impedance grid and reflection coefficients)
//! - Source wavelet synthesis (Ricker and Ormsby) with amplitude spectrum
//! - Convolutional synthetic section generation
//! - Tuning metrics: true and apparent thickness, measured and theoretical
//!   tuning/onset thickness, resolution limit, top-of-wedge amplitude curve
//!
//! All computation is pure and deterministic: identical inputs yield
//! bit-identical outputs. The enclosing application (forms, plotting,
//! persistence) supplies validated numbers and renders the arrays and
//! scalars returned here.

pub mod error;
pub mod model;
pub mod synthetic;
pub mod tuning;
pub mod types;
pub mod wavelet;

// Re-export main types for convenience
pub use error::WedgeError;
pub use model::{
    earth_model, impedance_model, EarthModel, DEPTH_SAMPLES, MAX_WEDGE_SAMPLES, WEDGE_TOP_ROW,
    WEDGE_TRACES,
};
pub use synthetic::{convolve_same, tuning_wedge};
#[cfg(feature = "parallel")]
pub use synthetic::tuning_wedge_parallel;
pub use tuning::{
    apparent_wedge_thickness, measured_onset_tuning_thickness, measured_tuning_thickness,
    onset_divergence_index, theoretical_onset_tuning_thickness, theoretical_resolution_limit,
    theoretical_tuning_thickness, tuning_curve_amplitude, wedge_thickness, TuningAnalysis,
    TuningMetrics,
};
pub use types::{LayerStack, Polarity, RockLayer};
pub use wavelet::{amplitude_spectrum, wavelet, AmplitudeSpectrum, WaveletSpec};
