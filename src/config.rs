//! Fixed report vocabulary and runtime options.

use clap::ValueEnum;

/// Value of `id` / `refid` that is never printed and that disables the
/// cross-reference form of an item.
pub const MESSAGE_SENTINEL: &str = "Message";

/// Body of every "Requirements Summary" subsection.
pub const REQUIREMENTS_PLACEHOLDER: &str = "TBD";

/// Line printed for a step definition whose sections carry no items.
pub const EMPTY_STEP_PLACEHOLDER: &str = "<NONE>";

/// Indentation of step reference lines.
pub const STEP_INDENT: &str = "   ";

/// Indentation of item lines and of the empty-step marker.
pub const ITEM_INDENT: &str = "      ";

/// Exit status for command line usage errors.
pub const USAGE_EXIT_CODE: u8 = 1;

/// Exit status for load, resolution and internal failures (`-1`).
pub const FATAL_EXIT_CODE: u8 = 255;

/// What to do when a step reference matches several lookup entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DuplicatePolicy {
    /// Abort the report.
    #[default]
    Error,
    /// Use the first matching definition in document order.
    First,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub on_duplicate: DuplicatePolicy,
}

impl ReportOptions {
    pub fn new(on_duplicate: DuplicatePolicy) -> Self {
        Self { on_duplicate }
    }
}
