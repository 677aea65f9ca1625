//! Concordia command-line entry point

use clap::Parser;
use concordia_cli::args::ConcordiaArgs;

fn main() {
    let args = ConcordiaArgs::parse();
    if let Err(error) = args.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
