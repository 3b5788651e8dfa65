use clap::{Arg, Command};

pub const TRANSPOSE_CMD: &str = "transpose";

pub fn create_transpose_cli() -> Command {
    Command::new(TRANSPOSE_CMD)
        .about("Transpose a CSV file (rows become columns), e.g. to reshape an aging CSV for spreadsheet analysis.")
        .arg(Arg::new("input"))
        .arg(Arg::new("output"))
}
