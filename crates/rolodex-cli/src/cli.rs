//! CLI command definitions and argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Rolodex - report the strongest partner relationship per company.
///
/// Reads one command per line (`Partner <Name>`, `Company <Name>`,
/// `Employee <Name> <Company>`, `Contact <Employee> <Partner> <Type>`)
/// and prints one report line per company.
#[derive(Debug, Parser)]
#[command(name = "rolodex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Expand each winning line with a per-employee contact breakdown
    #[arg(short, long)]
    pub verbose: bool,

    /// Input file with one command per line (standard input when omitted)
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rolodex"]);
        assert!(!cli.verbose);
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::parse_from(["rolodex", "--verbose"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["rolodex", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_input_path() {
        let cli = Cli::parse_from(["rolodex", "-v", "network.txt"]);
        assert!(cli.verbose);
        assert_eq!(cli.input, Some(PathBuf::from("network.txt")));
    }
}
