//! Country Registry Binary
//!
//! Loads the data file and starts the interactive menu.

use std::io;

use clap::Parser;
use country_registry::config::DEFAULT_DATA_FILE;
use country_registry::{Config, RegistryError, Shell};
use tracing_subscriber::{fmt, EnvFilter};

/// Country Registry
#[derive(Parser, Debug)]
#[command(name = "country-registry")]
#[command(about = "Interactive registry of country records backed by a CSV file")]
#[command(version)]
struct Args {
    /// CSV data file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data_file: String,
}

fn main() {
    // Logs go to stderr so they never mix with the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Country Registry v{}", country_registry::VERSION);
    tracing::info!("Data file: {}", args.data_file);

    let config = Config::builder().data_file(&args.data_file).build();

    println!("Starting country registry...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Shell::load(stdin.lock(), stdout.lock(), config).and_then(|mut shell| shell.run());

    match result {
        Ok(()) => {}
        Err(RegistryError::InputClosed) => {
            tracing::info!("Input closed, exiting without saving");
        }
        Err(e) => {
            tracing::error!("Shell error: {}", e);
        }
    }
}
