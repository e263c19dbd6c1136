//! Core value types for wedge modeling.
//!
//! These types carry the validated inputs of a modeling run: the three-layer
//! rock column and the polarity convention derived from its impedance
//! contrast. Constructing them is the only fallible step; everything computed
//! from them afterwards is pure.

mod layers;
mod polarity;

pub use layers::{LayerStack, RockLayer};
pub use polarity::Polarity;
