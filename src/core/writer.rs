use crate::config::{
    ReportOptions, EMPTY_STEP_PLACEHOLDER, ITEM_INDENT, REQUIREMENTS_PLACEHOLDER, STEP_INDENT,
};
use crate::core::error::ReportError;
use crate::core::format::{is_empty_step, ItemLine};
use crate::core::layout::{DocumentTree, Sequence, StepKey};
use crate::core::resolver::LookupTable;
use std::io::{self, Write};
use tracing::debug;

/// Writer is responsible for turning a loaded document into report text.
pub trait Writer {
    /// Write the report for every sequence in `tree`.
    ///
    /// Output is produced incrementally; on error, whatever was written
    /// before the failing step reference stays in the sink.
    fn write_report(&mut self, tree: &DocumentTree) -> Result<(), ReportError>;
}

/// Markdown-flavoured report writer over any byte sink.
#[derive(Debug)]
pub struct MarkdownWriter<W> {
    out: W,
    options: ReportOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self { out, options }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_sequence<'a>(
        &mut self,
        lookup: &LookupTable<'a>,
        sequence: &Sequence<'a>,
    ) -> Result<(), ReportError> {
        debug!(id = sequence.id(), "writing sequence");
        writeln!(self.out, "## {} (oms-id=\"{}\")", sequence.id(), sequence.oms_id())?;
        writeln!(self.out)?;
        writeln!(self.out, "### Requirements Summary")?;
        writeln!(self.out)?;
        writeln!(self.out, "{REQUIREMENTS_PLACEHOLDER}")?;
        writeln!(self.out)?;
        writeln!(self.out, "### Sequence Summary")?;
        writeln!(self.out)?;

        for step in sequence.steps() {
            writeln!(self.out, "{STEP_INDENT}{}:", step.id())?;
            self.write_step(lookup, &step.key())?;
        }
        Ok(())
    }

    /// Resolve one step reference and write the items of its definition,
    /// followed by a blank line.
    pub fn write_step<'a>(
        &mut self,
        lookup: &LookupTable<'a>,
        key: &StepKey<'a>,
    ) -> Result<(), ReportError> {
        let definition = lookup.resolve(key, self.options.on_duplicate)?;
        if is_empty_step(definition) {
            writeln!(self.out, "{ITEM_INDENT}{EMPTY_STEP_PLACEHOLDER}")?;
        } else {
            for section in &definition.children {
                for item in &section.children {
                    writeln!(self.out, "{ITEM_INDENT}{}", ItemLine::new(item))?;
                }
            }
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Writer for MarkdownWriter<W> {
    fn write_report(&mut self, tree: &DocumentTree) -> Result<(), ReportError> {
        let lookup = LookupTable::build(tree);
        debug!(definitions = lookup.len(), "indexed step definitions");
        for sequence in tree.sequences() {
            self.write_sequence(&lookup, &sequence)?;
        }
        Ok(())
    }
}

/// Render the whole report into a string.
pub fn render_report(tree: &DocumentTree, options: ReportOptions) -> Result<String, ReportError> {
    let mut writer = MarkdownWriter::new(Vec::new(), options);
    writer.write_report(tree)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
