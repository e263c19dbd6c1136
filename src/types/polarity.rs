//! Reflection polarity convention.
//!
//! Under SEG normal polarity, a decrease in impedance across the top of the
//! wedge produces a trough and an increase produces a peak. Every extremum
//! search in the tuning analysis must honor the same convention, so the
//! choice is made once from the impedance contrast and passed around as a
//! value instead of re-branching at each call site.

use faer::Mat;

/// Character of the top-of-wedge reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// Impedance decreases into the wedge: top reflection is a trough.
    Trough,
    /// Impedance increases into the wedge: top reflection is a peak.
    Peak,
}

impl Polarity {
    /// Determine polarity from the three layer impedances (top, wedge, base).
    #[inline]
    pub fn from_impedances(ai: &[f64; 3]) -> Self {
        if ai[1] < ai[0] {
            Polarity::Trough
        } else {
            Polarity::Peak
        }
    }

    /// Row of the top-of-wedge reflection in a column of a section.
    ///
    /// Trough polarity selects the minimum sample, peak polarity the maximum.
    /// Ties resolve to the shallowest row.
    pub fn top_row(self, section: &Mat<f64>, col: usize) -> usize {
        match self {
            Polarity::Trough => argmin_col(section, col),
            Polarity::Peak => argmax_col(section, col),
        }
    }

    /// Row of the base-of-wedge reflection: the extremum opposite the top.
    pub fn base_row(self, section: &Mat<f64>, col: usize) -> usize {
        match self {
            Polarity::Trough => argmax_col(section, col),
            Polarity::Peak => argmin_col(section, col),
        }
    }
}

/// Row index of the minimum value in one column (first occurrence on ties).
fn argmin_col(m: &Mat<f64>, col: usize) -> usize {
    let mut best = 0;
    for i in 1..m.nrows() {
        if m[(i, col)] < m[(best, col)] {
            best = i;
        }
    }
    best
}

/// Row index of the maximum value in one column (first occurrence on ties).
fn argmax_col(m: &Mat<f64>, col: usize) -> usize {
    let mut best = 0;
    for i in 1..m.nrows() {
        if m[(i, col)] > m[(best, col)] {
            best = i;
        }
    }
    best
}
