use crate::config::DuplicatePolicy;
use crate::core::error::ReportError;
use crate::core::layout::{DocumentTree, StepKey, XmlNode, ROOT_TAG};
use std::collections::HashMap;
use tracing::warn;

/// Index of a document's top-level `StepDef` entries by `(id, idnumeric)`.
#[derive(Debug)]
pub struct LookupTable<'a> {
    entries: HashMap<StepKey<'a>, Vec<&'a XmlNode>>,
}

impl<'a> LookupTable<'a> {
    pub fn build(tree: &'a DocumentTree) -> Self {
        let mut entries: HashMap<StepKey<'a>, Vec<&'a XmlNode>> = HashMap::new();
        for node in tree.step_definitions() {
            entries
                .entry(StepKey::of_definition(node))
                .or_default()
                .push(node);
        }
        Self { entries }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute lookup path for `key`, as shown in error messages.
    pub fn path_of(&self, key: &StepKey<'_>) -> String {
        format!("/{ROOT_TAG}/{key}")
    }

    /// Find the definition a step reference points at.
    pub fn resolve(
        &self,
        key: &StepKey<'a>,
        policy: DuplicatePolicy,
    ) -> Result<&'a XmlNode, ReportError> {
        let matches = self.entries.get(key).map(Vec::as_slice).unwrap_or_default();
        match (matches, policy) {
            ([], _) => Err(ReportError::StepNotFound {
                path: self.path_of(key),
            }),
            ([single], _) => Ok(*single),
            ([first, ..], DuplicatePolicy::First) => {
                warn!(
                    path = %self.path_of(key),
                    count = matches.len(),
                    "several step definitions match, using the first"
                );
                Ok(*first)
            }
            (_, DuplicatePolicy::Error) => Err(ReportError::AmbiguousStep {
                path: self.path_of(key),
                count: matches.len(),
            }),
        }
    }
}
