//! Unpacks the FV0 digit QC plots from a monitoring archive into a
//! fresh output archive: the raw collection, a range-restricted copy of
//! the summed A-side amplitude, and one amplitude projection per
//! channel.

pub mod consts {
    pub const EXTRACT_CMD: &str = "extract";

    pub const DEFAULT_OUT: &str = "aqc_fv0.json";

    /// Collection path the FV0 digit QC task publishes under.
    pub const DIGITS_COLLECTION: &str = "FV0/Digits";

    pub const PREPARED_COLLECTION: &str = "FV0/DigitsPrepared";
    pub const CH_AMP_COLLECTION: &str = "FV0/DigitsPreparedChAmp";

    /// Display range for the summed A-side amplitude.
    pub const SUM_AMP_RANGE: (f64, f64) = (0.0, 5000.0);
}

use std::path::Path;

use anyhow::{Context, Result};

use laserqc_core::models::{MonitorCollection, QcArchive, QcObject};

///
/// Build the prepared FV0 archive from a QC monitoring archive.
///
/// The output holds three collections: `FV0/Digits` with every monitor
/// object copied in input order, `FV0/DigitsPrepared` with `SumAmpA`
/// restricted to the display range and renamed `SumAmpAXRange`, and
/// `FV0/DigitsPreparedChAmp` with the `AmpCh{bin}` Y-projection of
/// `AmpPerChannel` for every channel column.
///
/// # Arguments:
/// - input: path to the QC archive (.json or .json.gz)
/// - output: path the prepared archive is written to
///
pub fn extract_local_plots(input: &Path, output: &Path) -> Result<()> {
    let archive = QcArchive::from_file(input)
        .with_context(|| format!("There was an error reading the QC archive: {:?}", input))?;
    let collection = archive.collection(consts::DIGITS_COLLECTION)?;

    let mut out_archive = QcArchive::default();
    out_archive.insert(consts::DIGITS_COLLECTION, collection.clone());

    let sum_amp = collection.hist1d("SumAmpA")?;
    let (range_min, range_max) = consts::SUM_AMP_RANGE;
    let restricted_name = format!("{}XRange", sum_amp.name);
    let restricted = sum_amp.restricted(&restricted_name, range_min, range_max);

    let mut prepared = MonitorCollection::default();
    prepared.add(&restricted_name, QcObject::Hist1D(restricted));
    out_archive.insert(consts::PREPARED_COLLECTION, prepared);

    let amp_per_channel = collection.hist2d("AmpPerChannel")?;
    let mut ch_amp = MonitorCollection::default();
    for bin in 1..=amp_per_channel.x_bins() {
        let name = format!("AmpCh{bin}");
        let projection = amp_per_channel.projection_y(bin, &name)?;
        ch_amp.add(&name, QcObject::Hist1D(projection));
    }
    out_archive.insert(consts::CH_AMP_COLLECTION, ch_amp);

    out_archive
        .to_file(output)
        .with_context(|| format!("Unable to open output archive for writing: {:?}", output))?;

    println!("Prepared archive '{}' has been created.", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use laserqc_core::models::{Histogram1D, Histogram2D};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn digits_archive() -> QcArchive {
        let mut collection = MonitorCollection::default();

        let mut sum_amp = Histogram1D::new("SumAmpA", 10, (0.0, 10000.0));
        sum_amp.counts = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        collection.add("SumAmpA", QcObject::Hist1D(sum_amp));

        let mut amp = Histogram2D::new("AmpPerChannel", 5, 3, (0.0, 5.0), (0.0, 300.0));
        for x in 1..=5 {
            amp.set_bin_content(x, 2, 10 * x as u64);
        }
        collection.add("AmpPerChannel", QcObject::Hist2D(amp));

        let mut archive = QcArchive::default();
        archive.insert(consts::DIGITS_COLLECTION, collection);
        archive
    }

    #[rstest]
    fn test_extract_layout(digits_archive: QcArchive) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("qc.json");
        let output = dir.path().join("aqc_fv0.json");
        digits_archive.to_file(&input).unwrap();

        extract_local_plots(&input, &output).unwrap();

        let prepared = QcArchive::from_file(&output).unwrap();
        assert_eq!(prepared.collections.len(), 3);

        // raw collection copied in input order
        let digits = prepared.collection(consts::DIGITS_COLLECTION).unwrap();
        let names: Vec<&str> = digits.objects.iter().map(|mo| mo.name.as_str()).collect();
        assert_eq!(names, vec!["SumAmpA", "AmpPerChannel"]);

        // range-restricted summary histogram
        let restricted = prepared
            .collection(consts::PREPARED_COLLECTION)
            .unwrap()
            .hist1d("SumAmpAXRange")
            .unwrap();
        assert_eq!(restricted.range, (0.0, 5000.0));
        assert_eq!(restricted.counts, vec![9, 8, 7, 6, 5]);

        // one projection per channel column
        let ch_amp = prepared.collection(consts::CH_AMP_COLLECTION).unwrap();
        assert_eq!(ch_amp.objects.len(), 5);
        let third = ch_amp.hist1d("AmpCh3").unwrap();
        assert_eq!(third.counts, vec![0, 30, 0]);
        assert_eq!(third.range, (0.0, 300.0));
    }

    #[rstest]
    fn test_extract_missing_collection() {
        let archive = QcArchive::default();

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("qc.json");
        let output = dir.path().join("out.json");
        archive.to_file(&input).unwrap();

        let result = extract_local_plots(&input, &output);

        assert!(result.is_err());
        assert!(!output.exists());
    }
}
