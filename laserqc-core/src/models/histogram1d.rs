use serde::{Deserialize, Serialize};

///
/// Summary statistics of a 1D distribution over a bin range.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub stddev: f64,
}

///
/// A named 1D frequency histogram with uniform binning.
///
/// Bins are numbered 1..=n_bins in the public API, matching the
/// convention of the QC framework the archives come from. Bin `i`
/// covers `[low_edge(i), low_edge(i) + bin_width())`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram1D {
    pub name: String,
    pub range: (f64, f64),
    pub counts: Vec<u64>,
}

impl Histogram1D {
    pub fn new(name: &str, n_bins: usize, range: (f64, f64)) -> Self {
        Histogram1D {
            name: name.to_string(),
            range,
            counts: vec![0; n_bins],
        }
    }

    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.range.1 - self.range.0) / self.counts.len() as f64
    }

    /// Low edge of bin `bin` (1-based).
    pub fn bin_low_edge(&self, bin: usize) -> f64 {
        self.range.0 + (bin as f64 - 1.0) * self.bin_width()
    }

    ///
    /// Weighted mean and standard deviation over the inclusive bin
    /// interval `[low_bin, high_bin]` (1-based), weighting each bin's
    /// LOW EDGE by its count. A zero total count yields (0.0, 0.0)
    /// rather than NaN. Variance is clamped at zero before the square
    /// root so floating-point cancellation can't produce NaN.
    ///
    /// # Arguments:
    /// - low_bin: first retained bin (1-based)
    /// - high_bin: last retained bin, clamped to the bin count
    ///
    pub fn statistics(&self, low_bin: usize, high_bin: usize) -> Statistics {
        let low_bin = low_bin.max(1);
        let high_bin = high_bin.min(self.n_bins());

        let mut weighted_sum = 0.0;
        let mut weighted_sum_squared = 0.0;
        let mut weight_sum = 0.0;

        for bin in low_bin..=high_bin {
            let count = self.counts[bin - 1] as f64;
            let edge = self.bin_low_edge(bin);
            weighted_sum += edge * count;
            weighted_sum_squared += edge * edge * count;
            weight_sum += count;
        }

        if weight_sum > 0.0 {
            let mean = weighted_sum / weight_sum;
            let variance = (weighted_sum_squared / weight_sum) - (mean * mean);
            Statistics {
                mean,
                stddev: variance.max(0.0).sqrt(),
            }
        } else {
            Statistics {
                mean: 0.0,
                stddev: 0.0,
            }
        }
    }

    ///
    /// Copy of this histogram restricted to bins whose low edge lies in
    /// `[min, max)`. The range is tightened to the kept bins.
    ///
    pub fn restricted(&self, name: &str, min: f64, max: f64) -> Histogram1D {
        let width = self.bin_width();
        let mut new_min = self.range.0;
        let mut counts = Vec::new();

        for bin in 1..=self.n_bins() {
            let edge = self.bin_low_edge(bin);
            if edge >= min && edge < max {
                if counts.is_empty() {
                    new_min = edge;
                }
                counts.push(self.counts[bin - 1]);
            }
        }

        let new_max = new_min + counts.len() as f64 * width;

        Histogram1D {
            name: name.to_string(),
            range: (new_min, new_max),
            counts,
        }
    }
}
