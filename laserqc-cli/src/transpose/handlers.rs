use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use laserqc_core::utils::transpose_csv;

pub fn run_transpose(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to the input CSV is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("A path for the transposed CSV is required.");

    transpose_csv(Path::new(input), Path::new(output))?;

    Ok(())
}
