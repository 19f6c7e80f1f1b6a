//! Rolodex CLI - strongest partner relationship per company.

use clap::Parser;
use rolodex_cli::{ingest, input, Cli, Result};
use rolodex_report::analyze;
use rolodex_store::MemoryNetwork;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Log to stderr so the report stream stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let lines = input::read_lines(cli.input.as_deref())?;
    let mut network = MemoryNetwork::new();
    ingest(&mut network, lines.iter().map(String::as_str))?;

    let report = analyze(&network, cli.verbose);
    if !report.is_empty() {
        println!("{}", report);
    }

    Ok(())
}
