//! Layered earth model construction.
//!
//! The wedge geometry is fixed: a grid of [`DEPTH_SAMPLES`] depth samples by
//! [`WEDGE_TRACES`] traces, with the top layer occupying the upper third of
//! the grid and the wedge thickening by one sample per trace from zero at
//! trace 0 to [`MAX_WEDGE_SAMPLES`] at the last trace.

mod wedge;

pub use wedge::{earth_model, impedance_model, EarthModel};

/// Number of depth samples (rows) in the wedge grid.
pub const DEPTH_SAMPLES: usize = 240;

/// Number of wedge positions (traces, columns) in the grid.
pub const WEDGE_TRACES: usize = 101;

/// Row at which the top of the wedge sits: the top layer fills the upper
/// third of the grid at every trace.
pub const WEDGE_TOP_ROW: usize = DEPTH_SAMPLES / 3;

/// Wedge thickness in samples at the last (thickest) trace.
pub const MAX_WEDGE_SAMPLES: usize = WEDGE_TRACES - 1;
