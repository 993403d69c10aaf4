use thiserror::Error;

use crate::models::fields::Section;

/// Errors raised while editing a `ResumeDocument`.
///
/// Neither variant is a user-facing condition: the form only ever edits rows
/// it has rendered and field keys it knows about, so hitting one of these
/// means the caller is out of sync with the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("{section} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("unknown {section} field '{field}'")]
    UnknownField { section: Section, field: String },
}

/// Failures inside a host print target.
///
/// The exporter logs these and drops them; they are never reported as
/// document errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error writing export: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to spawn print command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
