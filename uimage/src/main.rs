//! Main entry point for the uimage CLI tool

use clap::Parser;
use simple_logger::SimpleLogger;
use uimage::cli::{Args, exit_code, run_cli};

fn main() {
    let args = Args::parse();

    let _ = SimpleLogger::new().with_level(args.log_level()).init();

    if let Err(e) = run_cli(args) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}
