use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use laserqc_extract::consts::*;
use laserqc_extract::extract_local_plots;

pub fn run_extract(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a QC archive is required.");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    extract_local_plots(Path::new(input), Path::new(output))?;

    Ok(())
}
