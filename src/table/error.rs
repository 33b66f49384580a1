use thiserror::Error;

/// Errors raised while building an [`ElementTable`](super::ElementTable).
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed reference data at line {line}: {details}")]
    MalformedReferenceData { line: usize, details: String },

    #[error("duplicate element symbol '{symbol}' at line {line} (first defined at line {first_line})")]
    DuplicateSymbol {
        symbol: String,
        line: usize,
        first_line: usize,
    },
}

impl Error {
    pub fn malformed(line: usize, details: impl Into<String>) -> Self {
        Self::MalformedReferenceData {
            line,
            details: details.into(),
        }
    }
}

/// The requested symbol has no entry in the element table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element symbol: '{0}'")]
pub struct UnknownElement(pub(crate) String);

impl UnknownElement {
    pub fn symbol(&self) -> &str {
        &self.0
    }
}
