//! Haulmatch - excavator bucket matching and haul-cycle productivity
//!
//! Picks the largest bucket an excavator configuration can safely carry and
//! compares loadout productivity against the bucket currently fitted.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
