//! inference-report CLI: thin shell over the library pipeline
//!
//! All logic lives in `inference_report::cli` for testability. The binary
//! only initializes logging, parses arguments, and dispatches.

use clap::Parser;

use inference_report::cli::{run, Args};

fn main() {
    init_tracing();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
