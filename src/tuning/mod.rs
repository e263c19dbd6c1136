//! Tuning metrics derived from a synthetic wedge section.
//!
//! Splits into two layers: [`metrics`] holds the individual extraction
//! functions (thickness ramps, extremum picks, onset search, theoretical
//! scalars), and [`analysis`] wires the whole pipeline together the way a
//! calling application consumes it.

mod analysis;
mod metrics;

pub use analysis::{TuningAnalysis, TuningMetrics};
pub use metrics::{
    apparent_wedge_thickness, measured_onset_tuning_thickness, measured_tuning_thickness,
    onset_divergence_index, theoretical_onset_tuning_thickness, theoretical_resolution_limit,
    theoretical_tuning_thickness, tuning_curve_amplitude, wedge_thickness,
};
