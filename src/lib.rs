//! Markdown summaries for `SequenceDef` / `StepDef` XML documents.
//!
//! The document is loaded once into an owned [`DocumentTree`].
//! Every step reference of every sequence is resolved against the document's
//! flat `StepDef` lookup table, and each resolved definition is rendered as
//! report lines.

pub mod core {
    pub mod error;
    pub mod format;
    pub mod layout;
    pub mod parser;
    pub mod resolver;
    pub mod writer;
}

pub mod utils {
    pub mod document_processor;
}

pub mod cli;
pub mod config;

pub use crate::config::{DuplicatePolicy, ReportOptions};
pub use crate::core::error::{LoadError, ReportError};
pub use crate::core::layout::{DocumentTree, XmlNode};
pub use crate::core::writer::render_report;
