mod cli;
mod config;
mod identity;
mod storage;

use std::{io, process};

use tracing_subscriber::EnvFilter;

use config::Config;
use storage::Storage;

fn main() {
    let filter = EnvFilter::try_from_env("RECKON_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let root = Storage::default_root().unwrap_or_else(|| {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    });

    let storage = match Storage::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config, &storage) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
