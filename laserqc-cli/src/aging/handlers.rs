use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use clap::ArgMatches;

use laserqc_aging::Mode;
use laserqc_aging::consts::*;

pub fn run_aging(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a QC archive is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("A path for the output CSV is required.");

    let mode = match matches.get_one::<String>("mode") {
        Some(mode) => Mode::from_str(mode).map_err(anyhow::Error::msg)?,
        None => Mode::Amplitude,
    };

    let default_collection = DEFAULT_COLLECTION.to_string();
    let collection = matches
        .get_one::<String>("collection")
        .unwrap_or(&default_collection);

    laserqc_aging::run_aging(Path::new(input), collection, Path::new(output), mode)?;

    Ok(())
}
