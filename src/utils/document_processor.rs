use crate::config::ReportOptions;
use crate::core::error::ReportError;
use crate::core::parser::{Parser, XmlParser};
use crate::core::writer::{MarkdownWriter, Writer};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Loads one input document and streams its report into a sink.
pub struct DocumentProcessor {
    parser: XmlParser,
    options: ReportOptions,
}

impl DocumentProcessor {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            parser: XmlParser,
            options,
        }
    }

    /// Generate the report for `input` into `out`.
    ///
    /// The sink is flushed even when rendering fails, so the lines produced
    /// before the failure remain visible.
    pub fn process<P: AsRef<Path>, W: Write>(&self, input: P, out: W) -> Result<(), ReportError> {
        let input = input.as_ref();
        info!("Loading document: {}", input.display());

        let tree = self.parser.parse(input)?;
        debug!(
            nodes = tree.metadata.node_count,
            bytes = tree.metadata.file_size,
            "document loaded"
        );

        let mut writer = MarkdownWriter::new(out, self.options);
        let written = writer.write_report(&tree);
        let flushed = writer.flush();
        written?;
        flushed?;

        info!("Report complete for {}", tree.metadata.file_path);
        Ok(())
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoadError;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    fn document(xml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(xml.as_bytes()).expect("write xml");
        file
    }

    #[rstest]
    fn streams_report_for_file() {
        let file = document(
            r#"<Local>
                <SequenceDef id="SEQ1" oms-id="OMS1">
                    <StepDefs><StepDef id="S1" refid="R1" idnumeric="1"/></StepDefs>
                </SequenceDef>
                <StepDef id="R1" idnumeric="1"/>
            </Local>"#,
        );
        let mut out = Vec::new();
        DocumentProcessor::default()
            .process(file.path(), &mut out)
            .expect("report");

        let text = String::from_utf8(out).expect("utf-8 output");
        assert!(text.starts_with("## SEQ1 (oms-id=\"OMS1\")\n"));
        assert!(text.ends_with("   S1:\n      <NONE>\n\n"));
    }

    #[rstest]
    fn malformed_input_writes_nothing() {
        let file = document("<Local><SequenceDef></Local>");
        let mut out = Vec::new();
        let err = DocumentProcessor::default()
            .process(file.path(), &mut out)
            .expect_err("malformed xml");

        assert!(matches!(err, ReportError::Load { source: LoadError::Xml(_), .. }));
        assert!(out.is_empty());
    }

    #[rstest]
    fn resolution_failure_keeps_earlier_lines() {
        let file = document(
            r#"<Local>
                <SequenceDef id="SEQ1" oms-id="OMS1">
                    <StepDefs><StepDef id="S1" refid="R1" idnumeric="1"/></StepDefs>
                </SequenceDef>
            </Local>"#,
        );
        let mut out = Vec::new();
        let err = DocumentProcessor::default()
            .process(file.path(), &mut out)
            .expect_err("R1 is missing");

        assert!(matches!(err, ReportError::StepNotFound { .. }));
        let text = String::from_utf8(out).expect("utf-8 output");
        assert!(text.ends_with("### Sequence Summary\n\n   S1:\n"));
    }
}
