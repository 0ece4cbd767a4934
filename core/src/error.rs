//! Error types for search-core

use crate::DocId;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Coarse classification of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A word contains a control character
    InvalidFormat,
    /// Malformed input: bad document id, empty query, bad minus syntax
    InvalidArgument,
    /// Positional or id lookup outside the stored documents
    OutOfRange,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::OutOfRange => "out_of_range",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("word {0:?} contains a control character")]
    InvalidWord(String),

    #[error("document id {0} is negative")]
    NegativeDocumentId(DocId),

    #[error("document id {0} has been added already")]
    DuplicateDocumentId(DocId),

    #[error("query text is empty")]
    EmptyQuery,

    #[error("minus word has no text after '-'")]
    EmptyMinusWord,

    #[error("query word {0:?} starts with a double minus")]
    DoubleMinus(String),

    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("document index {index} is out of range for {count} documents")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("document {0} not found")]
    DocumentNotFound(DocId),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::InvalidWord(_) => ErrorKind::InvalidFormat,
            SearchError::NegativeDocumentId(_)
            | SearchError::DuplicateDocumentId(_)
            | SearchError::EmptyQuery
            | SearchError::EmptyMinusWord
            | SearchError::DoubleMinus(_)
            | SearchError::ZeroPageSize => ErrorKind::InvalidArgument,
            SearchError::IndexOutOfRange { .. } | SearchError::DocumentNotFound(_) => ErrorKind::OutOfRange,
        }
    }
}
