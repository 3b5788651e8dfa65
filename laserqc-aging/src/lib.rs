//! Post-processing for the FT0 aging-laser QC histograms: derives the
//! per-channel amplitude (or time) distributions from the 2D
//! per-channel histograms and prints their means, stddevs and bin
//! contents to a CSV file.

pub mod consts;
pub mod csv;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use indicatif::ProgressBar;

use laserqc_core::errors::QcError;
use laserqc_core::models::{Histogram1D, MonitorCollection, QcArchive};

pub use csv::write_csv;

///
/// Which per-channel quantity to extract. Picks the source histograms,
/// the derived names, the CSV unit label, and the low-bin cutoff.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Amplitude,
    Time,
}

impl Mode {
    pub fn unit_label(&self) -> &'static str {
        match self {
            Mode::Amplitude => "ADC ch",
            Mode::Time => "TDC ch",
        }
    }

    pub fn low_bin(&self) -> usize {
        match self {
            Mode::Amplitude => consts::AMP_LOW_BIN,
            Mode::Time => consts::TIME_LOW_BIN,
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amplitude" | "amp" => Ok(Mode::Amplitude),
            "time" => Ok(Mode::Time),
            _ => Err(format!("Invalid mode: {} (expected 'amplitude' or 'time')", s)),
        }
    }
}

///
/// Derive the ordered per-channel 1D distributions for one mode.
///
/// Amplitude: for each ADC (0, 1) and each channel 0..=207, project
/// column `channel + 1` of `AmpPerChannelADC{adc}` as
/// `AmpCh{ch}ADC{adc}`; then, for the reference channels 208..=211,
/// each laser peak (1, 2) and each ADC, project
/// `AmpPerChannelPeak{peak}ADC{adc}` as `AmpCh{ch}Peak{peak}ADC{adc}`.
///
/// Time: the same layout over `TimePerChannel` /
/// `TimePerChannelPeak{peak}`, without the ADC split.
///
/// The output order is exactly the enumeration order above; the CSV
/// rows preserve it. A missing source histogram aborts the whole
/// extraction, naming the object that was not found.
///
pub fn channel_distributions(
    collection: &MonitorCollection,
    mode: Mode,
) -> Result<Vec<Histogram1D>, QcError> {
    let mut distributions = Vec::new();

    let n_regular = consts::DETECTOR_CHANNELS;
    let n_reference = consts::REFERENCE_CHANNELS.count() * consts::PEAKS.count();
    let total = match mode {
        Mode::Amplitude => consts::ADCS.count() * (n_regular + n_reference),
        Mode::Time => n_regular + n_reference,
    };
    let pb = ProgressBar::new(total as u64);

    match mode {
        Mode::Amplitude => {
            for adc in consts::ADCS {
                let source = collection.hist2d(&format!("AmpPerChannelADC{adc}"))?;
                for ch in 0..consts::DETECTOR_CHANNELS {
                    distributions
                        .push(source.projection_y(ch + 1, &format!("AmpCh{ch}ADC{adc}"))?);
                    pb.inc(1);
                }
            }
            // Reference peaks
            for ch in consts::REFERENCE_CHANNELS {
                for peak in consts::PEAKS {
                    for adc in consts::ADCS {
                        let source =
                            collection.hist2d(&format!("AmpPerChannelPeak{peak}ADC{adc}"))?;
                        distributions.push(
                            source
                                .projection_y(ch + 1, &format!("AmpCh{ch}Peak{peak}ADC{adc}"))?,
                        );
                        pb.inc(1);
                    }
                }
            }
        }
        Mode::Time => {
            let source = collection.hist2d("TimePerChannel")?;
            for ch in 0..consts::DETECTOR_CHANNELS {
                distributions.push(source.projection_y(ch + 1, &format!("TimeCh{ch}"))?);
                pb.inc(1);
            }
            // Reference peaks
            for ch in consts::REFERENCE_CHANNELS {
                for peak in consts::PEAKS {
                    let source = collection.hist2d(&format!("TimePerChannelPeak{peak}"))?;
                    distributions
                        .push(source.projection_y(ch + 1, &format!("TimeCh{ch}Peak{peak}"))?);
                    pb.inc(1);
                }
            }
        }
    }

    pb.finish_and_clear();

    Ok(distributions)
}

///
/// Run the whole pipeline: open the archive, derive the per-channel
/// distributions and write them to a CSV file.
///
/// # Arguments:
/// - input: path to the QC archive (.json or .json.gz)
/// - collection_path: collection to read, e.g. "FT0/AgingLaser"
/// - output: path the CSV is written to
/// - mode: amplitude or time extraction
///
pub fn run_aging(input: &Path, collection_path: &str, output: &Path, mode: Mode) -> Result<()> {
    let archive = QcArchive::from_file(input)
        .with_context(|| format!("There was an error reading the QC archive: {:?}", input))?;
    let collection = archive.collection(collection_path)?;

    let distributions = channel_distributions(collection, mode)?;

    let file = File::create(output)
        .with_context(|| format!("Unable to open CSV file for writing: {:?}", output))?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, &distributions, mode)?;
    writer.flush()?;

    println!("CSV file '{}' has been created.", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use laserqc_core::models::{Histogram2D, QcObject};
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn channel_hist2d(name: &str, x_bins: usize) -> QcObject {
        let mut hist = Histogram2D::new(name, x_bins, 4, (0.0, x_bins as f64), (0.0, 400.0));
        // put a marker count into every column so projections are distinguishable
        for x in 1..=x_bins {
            hist.set_bin_content(x, 1, x as u64);
        }
        QcObject::Hist2D(hist)
    }

    #[fixture]
    fn aging_collection() -> MonitorCollection {
        let mut collection = MonitorCollection::default();
        for adc in 0..=1 {
            let name = format!("AmpPerChannelADC{adc}");
            collection.add(&name, channel_hist2d(&name, 208));
            for peak in 1..=2 {
                let name = format!("AmpPerChannelPeak{peak}ADC{adc}");
                collection.add(&name, channel_hist2d(&name, 212));
            }
        }
        collection.add("TimePerChannel", channel_hist2d("TimePerChannel", 208));
        for peak in 1..=2 {
            let name = format!("TimePerChannelPeak{peak}");
            collection.add(&name, channel_hist2d(&name, 212));
        }
        collection
    }

    #[rstest]
    fn test_amplitude_enumeration_order(aging_collection: MonitorCollection) {
        let distributions =
            channel_distributions(&aging_collection, Mode::Amplitude).unwrap();

        assert_eq!(distributions.len(), 2 * 208 + 4 * 2 * 2);

        let names: Vec<&str> = distributions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names[0], "AmpCh0ADC0");
        assert_eq!(names[1], "AmpCh1ADC0");
        assert_eq!(names[207], "AmpCh207ADC0");
        assert_eq!(names[208], "AmpCh0ADC1");
        assert_eq!(names[415], "AmpCh207ADC1");
        // reference block: channel-major, then peak, then ADC
        assert_eq!(names[416], "AmpCh208Peak1ADC0");
        assert_eq!(names[417], "AmpCh208Peak1ADC1");
        assert_eq!(names[418], "AmpCh208Peak2ADC0");
        assert_eq!(names[419], "AmpCh208Peak2ADC1");
        assert_eq!(names[420], "AmpCh209Peak1ADC0");
        assert_eq!(names[431], "AmpCh211Peak2ADC1");
    }

    #[rstest]
    fn test_time_enumeration_order(aging_collection: MonitorCollection) {
        let distributions = channel_distributions(&aging_collection, Mode::Time).unwrap();

        assert_eq!(distributions.len(), 208 + 4 * 2);

        let names: Vec<&str> = distributions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names[0], "TimeCh0");
        assert_eq!(names[207], "TimeCh207");
        assert_eq!(names[208], "TimeCh208Peak1");
        assert_eq!(names[209], "TimeCh208Peak2");
        assert_eq!(names[215], "TimeCh211Peak2");
    }

    #[rstest]
    fn test_projection_contents_follow_channel(aging_collection: MonitorCollection) {
        let distributions = channel_distributions(&aging_collection, Mode::Time).unwrap();

        // column ch+1 carries count ch+1 in the fixture
        assert_eq!(distributions[0].counts[0], 1);
        assert_eq!(distributions[207].counts[0], 208);
        assert_eq!(distributions[208].counts[0], 209);
    }

    #[rstest]
    fn test_missing_source_aborts(mut aging_collection: MonitorCollection) {
        aging_collection
            .objects
            .retain(|mo| mo.name != "AmpPerChannelADC1");

        let result = channel_distributions(&aging_collection, Mode::Amplitude);

        assert!(
            matches!(result, Err(QcError::ObjectNotFound(ref name)) if name == "AmpPerChannelADC1")
        );
    }

    #[rstest]
    fn test_mode_parsing() {
        assert_eq!(Mode::from_str("amplitude").unwrap(), Mode::Amplitude);
        assert_eq!(Mode::from_str("AMP").unwrap(), Mode::Amplitude);
        assert_eq!(Mode::from_str("time").unwrap(), Mode::Time);
        assert!(Mode::from_str("charge").is_err());
    }

    #[rstest]
    fn test_run_aging_end_to_end(aging_collection: MonitorCollection) {
        let mut archive = QcArchive::default();
        archive.insert(consts::DEFAULT_COLLECTION, aging_collection);

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("qc.json");
        let output = dir.path().join("aging.csv");
        archive.to_file(&input).unwrap();

        run_aging(&input, consts::DEFAULT_COLLECTION, &output, Mode::Time).unwrap();

        let csv = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 216 + 1);
        assert!(lines[0].starts_with("TDC ch,Mean,Stddev,"));
        assert!(lines[1].starts_with("TimeCh0,"));
    }
}
