//! Error types for input validation.
//!
//! The numeric kernels themselves are total over validated inputs: once a
//! `LayerStack` or `WaveletSpec` has been constructed, every downstream
//! computation is pure and infallible. All fallibility is concentrated at
//! the boundary where raw numbers enter the crate.

use thiserror::Error;

/// Error type for malformed modeling inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WedgeError {
    /// Wrong number of values for a fixed-arity input
    #[error("{what}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite value where a finite number is required
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Zero or negative value where a strictly positive one is required
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    /// Negative frequency
    #[error("{what} must be non-negative, got {value}")]
    NegativeFrequency { what: &'static str, value: f64 },

    /// Ormsby corner frequencies not strictly increasing.
    ///
    /// Equal adjacent corners would divide by zero in the band-limited-sinc
    /// coefficients, so strictness is required, not just monotonicity.
    #[error("Ormsby corners must be strictly increasing, got {corners:?}")]
    CornerOrder { corners: [f64; 4] },

    /// Duration/dt combination that yields no samples
    #[error("wavelet has no samples: duration {duration} s, dt {dt} s")]
    EmptyWavelet { duration: f64, dt: f64 },
}
