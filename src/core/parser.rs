use crate::core::error::{LoadError, ReportError};
use crate::core::layout::{DocumentMetadata, DocumentTree, XmlNode};
use roxmltree::{Document, Node};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub trait Parser {
    /// Load the document at `path` into a [`DocumentTree`].
    fn parse<P: AsRef<Path>>(&self, path: P) -> Result<DocumentTree, ReportError>;
}

/// `roxmltree`-backed loader. The whole file is read and parsed before any
/// rendering starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlParser;

impl XmlParser {
    /// Parse in-memory XML text.
    pub fn parse_str(&self, text: &str) -> Result<DocumentTree, LoadError> {
        let doc = Document::parse(text)?;
        let mut tree = DocumentTree::new(convert(doc.root_element()));
        tree.metadata.file_size = text.len() as u64;
        Ok(tree)
    }

    fn read(&self, path: &Path) -> Result<DocumentTree, LoadError> {
        let mut text = String::new();
        File::open(path)?.read_to_string(&mut text)?;
        self.parse_str(&text)
    }
}

impl Parser for XmlParser {
    fn parse<P: AsRef<Path>>(&self, path: P) -> Result<DocumentTree, ReportError> {
        let path = path.as_ref();
        let mut tree = self.read(path).map_err(|source| ReportError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        tree.metadata = DocumentMetadata {
            file_path: path.to_string_lossy().to_string(),
            ..tree.metadata
        };
        Ok(tree)
    }
}

/// Copy an element and its descendants into an owned [`XmlNode`].
///
/// Character data that is not pure whitespace becomes an unnamed leaf, so it
/// counts as content. Comments and processing instructions are dropped.
fn convert(node: Node<'_, '_>) -> XmlNode {
    XmlNode {
        name: node.tag_name().name().to_owned(),
        attributes: node
            .attributes()
            .map(|attr| (attr.name().to_owned(), attr.value().to_owned()))
            .collect(),
        children: node.children().filter_map(convert_child).collect(),
    }
}

fn convert_child(node: Node<'_, '_>) -> Option<XmlNode> {
    if node.is_element() {
        return Some(convert(node));
    }
    let text = node.is_text().then(|| node.text()).flatten()?;
    (!is_xml_whitespace(text)).then(XmlNode::default)
}

fn is_xml_whitespace(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    fn keeps_elements_and_attribute_order() {
        let tree = XmlParser
            .parse_str(
                r#"<Local>
                    <!-- lookup -->
                    <StepDef id="R1" idnumeric="1" color="red">
                        <Section><Item b="2" a="1"/></Section>
                    </StepDef>
                </Local>"#,
            )
            .expect("well-formed document");

        assert_eq!(tree.root.name, "Local");
        assert_eq!(tree.root.children.len(), 1);
        let step = &tree.root.children[0];
        let names: Vec<_> = step.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, ["id", "idnumeric", "color"]);
        assert_eq!(step.children.len(), 1);

        let item = &step.children[0].children[0];
        let item_names: Vec<_> = item.attributes.keys().map(String::as_str).collect();
        assert_eq!(item_names, ["b", "a"]);
        assert_eq!(tree.metadata.node_count, 4);
    }

    #[rstest]
    fn keeps_character_data_as_unnamed_leaves() {
        let tree = XmlParser
            .parse_str(
                r#"<Local>
                    <StepDef id="R1" idnumeric="1">
                        stray text
                        <Inputs>hello<!-- note --></Inputs>
                        <Outputs><![CDATA[raw]]></Outputs>
                        <Blank>   </Blank>
                    </StepDef>
                </Local>"#,
            )
            .expect("well-formed document");

        let step = &tree.root.children[0];
        let names: Vec<_> = step.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["", "Inputs", "Outputs", "Blank"]);
        assert_eq!(step.children[1].children, [XmlNode::default()]);
        assert_eq!(step.children[2].children, [XmlNode::default()]);
        assert!(step.children[3].children.is_empty());
    }

    #[rstest]
    fn rejects_malformed_xml() {
        let err = XmlParser.parse_str("<Local><StepDef></Local>");
        assert!(matches!(err, Err(LoadError::Xml(_))));
    }

    #[rstest]
    fn reads_documents_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"<Local><SequenceDef id="SEQ1"/></Local>"#).expect("write xml");

        let tree = XmlParser.parse(file.path()).expect("parse file");
        assert_eq!(tree.sequences().count(), 1);
        assert_eq!(tree.metadata.file_path, file.path().to_string_lossy());
        assert!(tree.metadata.file_size > 0);
    }

    #[rstest]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.xml");

        let err = XmlParser.parse(&path).expect_err("file does not exist");
        match err {
            ReportError::Load { path: failed, source: LoadError::Read(_) } => {
                assert_eq!(failed, path);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
