use clap::{Arg, Command, arg};

use laserqc_extract::consts::*;

pub fn create_extract_cli() -> Command {
    Command::new(EXTRACT_CMD)
        .about("Unpack the FV0 digit QC plots into a browsable output archive, with per-channel amplitude projections.")
        .arg(Arg::new("input"))
        .arg(arg!(--output <output>))
}
