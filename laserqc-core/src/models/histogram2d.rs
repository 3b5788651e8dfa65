use serde::{Deserialize, Serialize};

use crate::errors::QcError;
use crate::models::histogram1d::Histogram1D;

///
/// A named 2D frequency histogram with uniform binning on both axes.
///
/// The X axis is the discrete channel/category axis and the Y axis the
/// continuous value axis (amplitude, time). Counts are stored
/// column-major: `counts[x][y]` for X bin `x+1` and Y bin `y+1`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram2D {
    pub name: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub counts: Vec<Vec<u64>>,
}

impl Histogram2D {
    pub fn new(name: &str, x_bins: usize, y_bins: usize, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Histogram2D {
            name: name.to_string(),
            x_range,
            y_range,
            counts: vec![vec![0; y_bins]; x_bins],
        }
    }

    pub fn x_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn y_bins(&self) -> usize {
        self.counts.first().map_or(0, |column| column.len())
    }

    pub fn set_bin_content(&mut self, x_bin: usize, y_bin: usize, count: u64) {
        self.counts[x_bin - 1][y_bin - 1] = count;
    }

    ///
    /// Project the Y-value distribution of a single X bin (1-based) into
    /// a new 1D histogram named `name`. The output inherits the Y
    /// binning of this histogram exactly.
    ///
    /// # Arguments:
    /// - x_bin: the X bin to slice (1-based, inclusive single column)
    /// - name: name assigned to the derived histogram
    ///
    pub fn projection_y(&self, x_bin: usize, name: &str) -> Result<Histogram1D, QcError> {
        if x_bin < 1 || x_bin > self.x_bins() {
            return Err(QcError::BinOutOfRange {
                name: self.name.clone(),
                bin: x_bin,
                n_bins: self.x_bins(),
            });
        }

        Ok(Histogram1D {
            name: name.to_string(),
            range: self.y_range,
            counts: self.counts[x_bin - 1].clone(),
        })
    }
}
