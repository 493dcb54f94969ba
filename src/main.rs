//! CLI entry point for tablemap.

use clap::Parser;
use tablemap::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // WARN level by default, DEBUG with --debug, respecting RUST_LOG.
    // Logs go to stderr; stdout carries only the compiled mapping table.
    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli::run(&cli) {
        Ok(mapping_table) => println!("{mapping_table}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
