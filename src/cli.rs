//! Command line interface.

use crate::config::{DuplicatePolicy, ReportOptions};
use crate::core::error::ReportError;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Print a Markdown summary of the sequences in a `SequenceDef` XML document.
#[derive(Debug, Parser)]
#[command(name = "stepdef-report", version, about)]
pub struct Cli {
    /// XML document holding `SequenceDef` and `StepDef` elements.
    pub input: PathBuf,

    /// Log progress to standard error.
    #[arg(short, long)]
    pub verbose: bool,

    /// How to treat a step reference that matches several definitions.
    #[arg(long, value_enum, default_value_t = DuplicatePolicy::Error)]
    pub on_duplicate: DuplicatePolicy,
}

impl Cli {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::new(self.on_duplicate)
    }
}

/// Whether clap wants to print help or version text and exit normally.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// The single diagnostic line for an argument error.
pub fn usage_failure(err: &clap::Error) -> String {
    if err.kind() == ErrorKind::MissingRequiredArgument {
        return "[ERROR] Missing input file".to_owned();
    }
    let rendered = err.to_string();
    let summary = rendered.lines().next().unwrap_or_default();
    format!(
        "[ERROR] Invalid arguments: {}",
        summary.trim_start_matches("error: ")
    )
}

/// The single diagnostic line for a failed run.
///
/// Document problems are reported as `[ERROR]`; anything else is unexpected
/// and reported as `[EXCEP]` with its full cause chain.
pub fn run_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ReportError>() {
        Some(report_err) if !report_err.is_internal() => format!("[ERROR] {report_err}"),
        _ => format!("[EXCEP] {err:#}"),
    }
}

/// Write a diagnostic line to the report stream.
///
/// A closed or broken stream is ignored: the exit status still reports the
/// failure.
pub fn emit_diagnostic<W: Write>(mut out: W, line: &str) {
    if writeln!(out, "{line}").and_then(|()| out.flush()).is_err() {
        tracing::debug!(line, "diagnostic could not be written");
    }
}
