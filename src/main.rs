//! Application entry point.
//!
//! Parses command-line arguments, streams the report to standard output and
//! maps failures to a single diagnostic line plus an exit status.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use stepdef_report::cli::{emit_diagnostic, is_informational, run_failure, usage_failure, Cli};
use stepdef_report::config::{FATAL_EXIT_CODE, USAGE_EXIT_CODE};
use stepdef_report::utils::document_processor::DocumentProcessor;
use tracing::Level;
use tracing_subscriber::fmt;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_informational(&err) => err.exit(),
        Err(err) => {
            emit_diagnostic(io::stdout().lock(), &usage_failure(&err));
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    let max_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    };
    fmt()
        .with_max_level(max_level)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "report generation failed");
            emit_diagnostic(io::stdout().lock(), &run_failure(&err));
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let processor = DocumentProcessor::new(cli.report_options());
    processor.process(&cli.input, io::stdout().lock())?;
    Ok(())
}
