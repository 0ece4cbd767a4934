//! In-memory document search with TF-IDF ranking and plus/minus query words.

pub mod document;
pub mod error;
pub mod index;
pub mod matcher;
pub mod paginator;
pub mod query;
pub mod ranking;
pub mod request_queue;
pub mod server;
pub mod stop_words;
pub mod tokenizer;

pub type DocId = i32;

pub use document::{Document, DocumentRecord, DocumentStatus};
pub use error::{ErrorKind, Result, SearchError};
pub use index::{InvertedIndex, Postings};
pub use matcher::MatchResult;
pub use paginator::{paginate, Page};
pub use query::Query;
pub use ranking::{MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
pub use request_queue::{RequestQueue, REQUEST_WINDOW};
pub use server::SearchServer;
pub use stop_words::StopWords;
