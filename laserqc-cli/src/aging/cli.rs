use clap::{Arg, Command, arg};

use laserqc_aging::consts::*;

pub fn create_aging_cli() -> Command {
    Command::new(AGING_CMD)
        .about("Print the means, stddevs and bin contents of the aging-laser QC histograms to a CSV file.")
        .arg(Arg::new("input"))
        .arg(Arg::new("output"))
        .arg(arg!(--mode <mode>))
        .arg(arg!(--collection <collection>))
}
