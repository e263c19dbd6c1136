//! Impedance grid and reflection coefficients for the tuning wedge.

use faer::Mat;

use crate::error::WedgeError;
use crate::model::{DEPTH_SAMPLES, WEDGE_TOP_ROW, WEDGE_TRACES};
use crate::types::LayerStack;

/// A built earth model: per-cell impedance and reflection coefficients.
///
/// Both grids have shape ([`DEPTH_SAMPLES`], [`WEDGE_TRACES`]). Column `j`
/// is the synthetic trace whose wedge is `j` samples thick.
#[derive(Clone, Debug)]
pub struct EarthModel {
    /// Reflection coefficient at each sample; row 0 is all zero since there
    /// is no interface above the first sample.
    pub rc: Mat<f64>,
    /// Acoustic impedance of the layer occupying each cell.
    pub imp: Mat<f64>,
}

/// Index of the layer occupying row `i` at trace `j`.
///
/// The upper third of the grid is always the top layer. Below it, the base
/// layer rises along the wedge diagonal: at trace `j` the base starts
/// `j` samples below the wedge top, so trace 0 has a zero-thickness wedge
/// and the last trace the thickest one.
#[inline]
fn layer_index(i: usize, j: usize) -> usize {
    if i < WEDGE_TOP_ROW {
        0
    } else if i >= WEDGE_TOP_ROW + j {
        2
    } else {
        1
    }
}

/// Build the wedge earth model from a validated layer stack.
///
/// Returns per-cell impedance and the reflection-coefficient grid
/// `rc[i] = (imp[i] - imp[i-1]) / (imp[i] + imp[i-1])` down each trace.
/// Layer impedances are strictly positive ([`LayerStack`] guarantees it),
/// so the denominators never vanish.
pub fn earth_model(stack: &LayerStack) -> EarthModel {
    let ai = stack.impedances();

    let mut imp = Mat::<f64>::zeros(DEPTH_SAMPLES, WEDGE_TRACES);
    for j in 0..WEDGE_TRACES {
        for i in 0..DEPTH_SAMPLES {
            imp[(i, j)] = ai[layer_index(i, j)];
        }
    }

    let mut rc = Mat::<f64>::zeros(DEPTH_SAMPLES, WEDGE_TRACES);
    for j in 0..WEDGE_TRACES {
        for i in 1..DEPTH_SAMPLES {
            let below = imp[(i, j)];
            let above = imp[(i - 1, j)];
            rc[(i, j)] = (below - above) / (below + above);
        }
    }

    EarthModel { rc, imp }
}

/// Layer acoustic impedances from the flat six-value property sequence.
///
/// Convenience entry point for callers holding raw form values; validates
/// and returns elementwise `Vp * density` for the three layers.
pub fn impedance_model(rock_props: &[f64]) -> Result<[f64; 3], WedgeError> {
    Ok(LayerStack::from_props(rock_props)?.impedances())
}
