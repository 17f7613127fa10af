//! Command-line front end for spelling correction and text preprocessing.
//!
//! Subcommands correct words and texts against a vocabulary (`correct`,
//! `correct-text`, `suggest`, `candidates`, `batch`), run transform chains
//! (`preprocess`, `sentences`, `keywords`), and inspect or export the
//! vocabulary (`vocab stats`, `vocab export`).

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use preprocessing::cli::args::PreprocessingArgs;
use preprocessing::cli::commands::execute_command;

fn main() {
    let args = PreprocessingArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
