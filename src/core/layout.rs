use indexmap::IndexMap;
use std::fmt;

pub const ROOT_TAG: &str = "Local";
pub const SEQUENCE_TAG: &str = "SequenceDef";
pub const STEP_LIST_TAG: &str = "StepDefs";
pub const STEP_TAG: &str = "StepDef";

/// One node of the loaded document.
///
/// Attributes keep document order; the item formatter depends on it.
/// Non-whitespace character data is kept as a node with an empty name and
/// no attributes or children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value, or `""` when the attribute is absent.
    pub fn attribute_or_empty(&self, name: &str) -> &str {
        self.attribute(name).unwrap_or_default()
    }

    /// Direct children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(XmlNode::node_count).sum::<usize>()
    }
}

/// Information about where a document came from.
#[derive(Debug, Clone, Default)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub node_count: usize,
}

/// In-memory document, read-only for the whole report run.
#[derive(Debug, Clone, Default)]
pub struct DocumentTree {
    pub root: XmlNode,
    pub metadata: DocumentMetadata,
}

impl DocumentTree {
    pub fn new(root: XmlNode) -> Self {
        let node_count = root.node_count();
        Self {
            root,
            metadata: DocumentMetadata {
                node_count,
                ..DocumentMetadata::default()
            },
        }
    }

    /// `/Local/SequenceDef`, in document order.
    pub fn sequences(&self) -> impl Iterator<Item = Sequence<'_>> {
        self.top_level(SEQUENCE_TAG).map(Sequence)
    }

    /// The flat lookup table: `/Local/StepDef`.
    pub fn step_definitions(&self) -> impl Iterator<Item = &XmlNode> {
        self.top_level(STEP_TAG)
    }

    /// Children of a `Local` root with the given tag; nothing for any other root.
    fn top_level<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        (self.root.name == ROOT_TAG)
            .then_some(&self.root)
            .into_iter()
            .flat_map(move |root| root.children_named(tag))
    }
}

/// View of a `SequenceDef` element.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<'a>(&'a XmlNode);

impl<'a> Sequence<'a> {
    pub fn id(&self) -> &'a str {
        self.0.attribute_or_empty("id")
    }

    pub fn oms_id(&self) -> &'a str {
        self.0.attribute_or_empty("oms-id")
    }

    /// Step references at `StepDefs/StepDef`, in document order.
    pub fn steps(&self) -> impl Iterator<Item = StepRef<'a>> + 'a {
        self.0
            .children_named(STEP_LIST_TAG)
            .flat_map(|list| list.children_named(STEP_TAG))
            .map(StepRef)
    }
}

/// View of a `StepDef` nested in a sequence's `StepDefs` list.
#[derive(Debug, Clone, Copy)]
pub struct StepRef<'a>(&'a XmlNode);

impl<'a> StepRef<'a> {
    pub fn id(&self) -> &'a str {
        self.0.attribute_or_empty("id")
    }

    pub fn key(&self) -> StepKey<'a> {
        StepKey {
            refid: self.0.attribute_or_empty("refid"),
            idnumeric: self.0.attribute_or_empty("idnumeric"),
        }
    }
}

/// Composite key of a lookup table entry: its `id` and `idnumeric`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepKey<'a> {
    pub refid: &'a str,
    pub idnumeric: &'a str,
}

impl<'a> StepKey<'a> {
    /// Key under which a lookup entry is addressed.
    pub fn of_definition(node: &'a XmlNode) -> Self {
        Self {
            refid: node.attribute_or_empty("id"),
            idnumeric: node.attribute_or_empty("idnumeric"),
        }
    }
}

impl fmt::Display for StepKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{STEP_TAG}[@id='{}' and @idnumeric='{}']",
            self.refid, self.idnumeric
        )
    }
}
