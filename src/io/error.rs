use crate::table::UnknownElement;
use thiserror::Error;

/// Errors raised while loading a [`Structure`](crate::Structure).
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid atom count: {details}")]
    InvalidAtomCount { details: String },

    #[error("input truncated: expected {expected} lines (count, title, atoms) but found {found}")]
    TruncatedInput { expected: usize, found: usize },

    #[error("malformed coordinate line {line}: {details}")]
    MalformedCoordinateLine { line: usize, details: String },

    #[error("atom {atom}: {details}")]
    CoordinateOutOfRange { atom: usize, details: String },

    #[error("atom {atom}: {source}")]
    UnknownElement {
        atom: usize,
        #[source]
        source: UnknownElement,
    },
}

impl Error {
    pub fn invalid_atom_count(details: impl Into<String>) -> Self {
        Self::InvalidAtomCount {
            details: details.into(),
        }
    }

    pub fn malformed_line(line: usize, details: impl Into<String>) -> Self {
        Self::MalformedCoordinateLine {
            line,
            details: details.into(),
        }
    }

    pub fn out_of_range(atom: usize, details: impl Into<String>) -> Self {
        Self::CoordinateOutOfRange {
            atom,
            details: details.into(),
        }
    }

    /// The unresolved symbol, if this is an [`UnknownElement`](Error::UnknownElement) error.
    pub fn unknown_symbol(&self) -> Option<&str> {
        match self {
            Self::UnknownElement { source, .. } => Some(source.symbol()),
            _ => None,
        }
    }
}
