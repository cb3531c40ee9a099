//! VBIT configuration CLI
//!
//! Resolves the inserter settings for the given flags and prints the
//! effective configuration as JSON on stdout. Diagnostics go to stderr.

use std::process::ExitCode;
use vbit_config::{logging, Args, PassthroughEncoder, Resolver};

fn main() -> ExitCode {
    // Prints help, version or the usage error and exits.
    let args = Args::parse_args(std::env::args().skip(1)).unwrap_or_else(|e| e.exit());

    logging::init(args.debug.unwrap_or(0));

    let resolver = Resolver::new(PassthroughEncoder);
    let resolved = match resolver.resolve(&args) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match resolved.to_json() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            ExitCode::FAILURE
        }
    }
}
