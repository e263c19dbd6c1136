//! Convolutional synthetic section generation.

mod convolution;

pub use convolution::{convolve_same, tuning_wedge};

#[cfg(feature = "parallel")]
pub use convolution::tuning_wedge_parallel;
