#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use enumtab::cli::args::CliArgs;
use enumtab::cli::{driver, reporter::Reporter};

/// Exit status when output was written but some types were skipped.
const EXIT_TYPES_SKIPPED: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if ENUMTAB_LOG or RUST_LOG is set (zero cost otherwise).
    enumtab::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let invocation = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let reporter = Reporter::new(std::io::stderr().is_terminal());

    let summary = driver::run(&args, &invocation)?;
    if !summary.diagnostics.is_empty() {
        eprintln!("{}", reporter.render(&summary.diagnostics));
    }
    eprintln!("{}", reporter.format_summary(&summary));

    if !summary.skipped.is_empty() {
        std::process::exit(EXIT_TYPES_SKIPPED);
    }
    Ok(())
}
