use std::io::Write;

use laserqc_core::errors::QcError;
use laserqc_core::models::Histogram1D;

use crate::Mode;

///
/// Serialize an ordered set of per-channel distributions as CSV.
///
/// The header row is `<unit>,Mean,Stddev` followed by the bin low edges
/// of the first distribution (all distributions in one invocation share
/// their binning). Each data row is the distribution name, its weighted
/// mean and stddev over the mode's retained bin range, then the raw
/// per-bin counts. Rows come out in input order.
///
/// An empty input is refused with `EmptyCollection` rather than
/// producing a header-only file, and a distribution whose binning
/// differs from the first is refused with `MixedBinning` before
/// anything is written.
///
pub fn write_csv<W: Write>(
    writer: &mut W,
    distributions: &[Histogram1D],
    mode: Mode,
) -> Result<(), QcError> {
    let first = distributions.first().ok_or(QcError::EmptyCollection)?;
    let n_bins = first.n_bins();

    for distribution in distributions {
        if distribution.n_bins() != n_bins {
            return Err(QcError::MixedBinning(
                distribution.name.clone(),
                distribution.n_bins(),
                n_bins,
            ));
        }
    }

    write!(writer, "{},Mean,Stddev", mode.unit_label())?;
    for bin in 1..=n_bins {
        write!(writer, ",{}", first.bin_low_edge(bin))?;
    }
    writeln!(writer)?;

    for distribution in distributions {
        let stats = distribution.statistics(mode.low_bin(), n_bins);

        write!(writer, "{},{},{}", distribution.name, stats.mean, stats.stddev)?;
        for bin in 1..=n_bins {
            write!(writer, ",{}", distribution.counts[bin - 1])?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
