use crate::document::{Document, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::index::InvertedIndex;
use crate::matcher::{match_document, MatchResult};
use crate::query::{parse_query, Query};
use crate::ranking::{rank_documents, with_status};
use crate::stop_words::StopWords;
use crate::DocId;
use std::str::FromStr;

/// Entry point: owns the index and answers queries against it.
#[derive(Debug, Default)]
pub struct SearchServer {
    index: InvertedIndex,
}

impl SearchServer {
    /// Build with stop words given as separate strings.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_stop_words(StopWords::new(stop_words)?))
    }

    /// Build with stop words given as one space-delimited string.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Ok(Self::with_stop_words(text.parse()?))
    }

    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { index: InvertedIndex::new(stop_words) }
    }

    pub fn add_document(&mut self, doc_id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        self.index.add_document(doc_id, text, status, ratings)
    }

    pub fn parse_query(&self, raw_query: &str) -> Result<Query> {
        parse_query(raw_query, self.index.stop_words())
    }

    /// Top documents accepted by `predicate(id, status, rating)`.
    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let query = self.parse_query(raw_query)?;
        rank_documents(&self.index, &query, predicate)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, with_status(status))
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn match_document(&self, raw_query: &str, doc_id: DocId) -> Result<MatchResult> {
        let query = self.parse_query(raw_query)?;
        match_document(&self.index, &query, doc_id)
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Id of the `index`-th document, counting in ascending id order.
    pub fn document_id(&self, index: usize) -> Result<DocId> {
        self.index.id_at(index)
    }

    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.index.ids()
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

impl FromStr for SearchServer {
    type Err = SearchError;

    fn from_str(stop_words_text: &str) -> Result<Self> {
        Self::from_stop_words_text(stop_words_text)
    }
}
