//! Bug Lab CLI - runs the exercise demos
//!
//! Each subcommand invokes one exercise's verification harness, which
//! prints the buggy and fixed behavior side by side for debugging practice.

use bug_lab::{commands::Commands, common::logging, exercises};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bug-lab", about = "Paired buggy/fixed debugging exercises")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serialization => exercises::serialization::demo(),
        Commands::Transform => exercises::transform::demo(),
        Commands::Extraction => exercises::extraction::demo(),
        Commands::Taxation => exercises::taxation::demo(),
        Commands::Reduction => exercises::reduction::demo(),
        Commands::All => exercises::run_all(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
