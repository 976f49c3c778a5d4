use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why an input document could not be turned into a [`crate::DocumentTree`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Read(#[from] io::Error),
    #[error(transparent)]
    Xml(#[from] roxmltree::Error),
}

/// Fatal failures while producing a report.
///
/// None of these are recoverable: the run stops at the first one, and any
/// lines already written stay in the output.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot load xml file ({}): {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// A step reference has no matching lookup entry.
    #[error("Cannot find path: {path}")]
    StepNotFound { path: String },

    /// A step reference matches more than one lookup entry.
    #[error("Ambiguous path: {path} matches {count} step definitions")]
    AmbiguousStep { path: String, count: usize },

    #[error("failed to write report")]
    Io(#[from] io::Error),
}

impl ReportError {
    /// Whether the error comes from the environment rather than the document.
    pub fn is_internal(&self) -> bool {
        matches!(self, ReportError::Io(_))
    }
}
