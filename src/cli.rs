//! Command-line interface for tablemap.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::source::Source;

/// Compile terse YAML table mappings into DMS mapping tables.
#[derive(Parser)]
#[command(name = "tablemap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the source file
    pub source: PathBuf,

    /// Enable debug logs
    #[arg(short, long)]
    pub debug: bool,
}

/// Compile the source named on the command line to a mapping table.
pub fn run(cli: &Cli) -> Result<String> {
    Source::new(&cli.source).compile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_source() {
        let cli = Cli::parse_from(["tablemap", "source.yaml"]);
        assert_eq!(cli.source, PathBuf::from("source.yaml"));
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parse_debug_flag() {
        let cli = Cli::parse_from(["tablemap", "--debug", "source.yaml"]);
        assert_eq!(cli.source, PathBuf::from("source.yaml"));
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_parse_short_debug_flag() {
        let cli = Cli::parse_from(["tablemap", "-d", "source.yaml"]);
        assert!(cli.debug);
    }
}
