//! Rock layer properties and the three-layer wedge column.

use crate::error::WedgeError;
use crate::types::Polarity;

/// A single rock layer described by its P-wave velocity and bulk density.
///
/// Units are not enforced, only consistency: impedance is the plain product
/// `vp * density`, and only impedance ratios enter the reflection
/// coefficients, so any consistent unit system works.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RockLayer {
    /// P-wave velocity (e.g. m/s)
    pub vp: f64,
    /// Bulk density (e.g. g/cc)
    pub density: f64,
}

impl RockLayer {
    /// Create a new rock layer.
    #[inline]
    pub const fn new(vp: f64, density: f64) -> Self {
        Self { vp, density }
    }

    /// Acoustic impedance: velocity times density.
    #[inline]
    pub fn impedance(self) -> f64 {
        self.vp * self.density
    }
}

/// The three-layer column of a wedge model: top, wedge (middle), base.
///
/// The middle layer is the one whose thickness varies across the wedge;
/// the top and base layers are half-spaces above and below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStack {
    layers: [RockLayer; 3],
}

impl LayerStack {
    /// Build a stack from three explicit layers.
    pub const fn new(top: RockLayer, wedge: RockLayer, base: RockLayer) -> Self {
        Self {
            layers: [top, wedge, base],
        }
    }

    /// Build a stack from the flat property sequence
    /// `[vp1, rho1, vp2, rho2, vp3, rho3]`.
    ///
    /// Validates length, finiteness, and strict positivity. Positivity is
    /// what makes the reflection-coefficient denominators nonzero, so it is
    /// checked here rather than deferred to the model builder.
    pub fn from_props(props: &[f64]) -> Result<Self, WedgeError> {
        if props.len() != 6 {
            return Err(WedgeError::ShapeMismatch {
                what: "rock properties",
                expected: 6,
                actual: props.len(),
            });
        }
        const NAMES: [&str; 6] = [
            "layer 1 Vp",
            "layer 1 density",
            "layer 2 Vp",
            "layer 2 density",
            "layer 3 Vp",
            "layer 3 density",
        ];
        for (&value, &what) in props.iter().zip(NAMES.iter()) {
            if !value.is_finite() {
                return Err(WedgeError::NonFinite { what, value });
            }
            if value <= 0.0 {
                return Err(WedgeError::NonPositive { what, value });
            }
        }
        Ok(Self::new(
            RockLayer::new(props[0], props[1]),
            RockLayer::new(props[2], props[3]),
            RockLayer::new(props[4], props[5]),
        ))
    }

    /// The three layers in top-to-base order.
    #[inline]
    pub fn layers(&self) -> &[RockLayer; 3] {
        &self.layers
    }

    /// Acoustic impedance of each layer, top to base.
    #[inline]
    pub fn impedances(&self) -> [f64; 3] {
        [
            self.layers[0].impedance(),
            self.layers[1].impedance(),
            self.layers[2].impedance(),
        ]
    }

    /// Polarity of the top-of-wedge reflection under SEG normal polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        Polarity::from_impedances(&self.impedances())
    }
}
