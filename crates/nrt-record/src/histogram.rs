//! Flux and event-rate histograms carried by input files.

use serde::{Deserialize, Serialize};

/// A 1D histogram as stored alongside the event tree in an input file.
///
/// Only the integral is consumed by the converter (per-file event weights);
/// the binning is kept so diagnostics can describe the histogram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Histogram name.
    #[serde(default)]
    pub name: String,
    /// Bin edges (length = n_bins + 1).
    #[serde(default)]
    pub bin_edges: Vec<f64>,
    /// Bin contents (excluding under/overflow).
    pub bin_content: Vec<f64>,
    /// Total number of entries.
    #[serde(default)]
    pub entries: f64,
}

impl Histogram {
    /// Sum of bin contents.
    pub fn integral(&self) -> f64 {
        self.bin_content.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_sums_bins() {
        let h = Histogram {
            name: "flux_numu".into(),
            bin_edges: vec![0.0, 1.0, 2.0, 3.0],
            bin_content: vec![2.0, 5.0, 3.0],
            entries: 10.0,
        };
        assert_eq!(h.integral(), 10.0);
    }

    #[test]
    fn empty_histogram_has_zero_integral() {
        assert_eq!(Histogram::default().integral(), 0.0);
    }
}
