mod aging;
mod extract;
mod transpose;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "laserqc";
    pub const BIN_NAME: &str = "laserqc";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Post-processing tools for FIT detector QC histogram archives: per-channel projections, summary statistics and CSV exports.")
        .subcommand_required(true)
        .subcommand(aging::cli::create_aging_cli())
        .subcommand(extract::cli::create_extract_cli())
        .subcommand(transpose::cli::create_transpose_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // AGING
        //
        Some((laserqc_aging::consts::AGING_CMD, matches)) => {
            aging::handlers::run_aging(matches)?;
        }

        //
        // EXTRACT
        //
        Some((laserqc_extract::consts::EXTRACT_CMD, matches)) => {
            extract::handlers::run_extract(matches)?;
        }

        //
        // TRANSPOSE
        //
        Some((transpose::cli::TRANSPOSE_CMD, matches)) => {
            transpose::handlers::run_transpose(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
