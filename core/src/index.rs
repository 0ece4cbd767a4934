use crate::document::{compute_average_rating, DocumentRecord, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::stop_words::StopWords;
use crate::tokenizer::{split_into_words, validate_word};
use crate::DocId;
use std::collections::BTreeMap;

/// Document id -> term frequency for one word.
pub type Postings = BTreeMap<DocId, f64>;

static NO_POSTINGS: Postings = BTreeMap::new();

/// Inverted index plus the document metadata table.
///
/// Documents are keyed by id in ascending order, which is also the order
/// used for positional lookup. `doc_ids` mirrors the keys of `docs` so that
/// lookup is constant time.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    stop_words: StopWords,
    postings: BTreeMap<String, Postings>,
    docs: BTreeMap<DocId, DocumentRecord>,
    doc_ids: Vec<DocId>,
}

impl InvertedIndex {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words, ..Self::default() }
    }

    /// Index a document. Nothing is mutated unless every check passes.
    pub fn add_document(&mut self, doc_id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        if doc_id < 0 {
            return Err(SearchError::NegativeDocumentId(doc_id));
        }
        let slot = match self.doc_ids.binary_search(&doc_id) {
            Ok(_) => return Err(SearchError::DuplicateDocumentId(doc_id)),
            Err(slot) => slot,
        };
        let words = self.split_into_words_no_stop(text)?;

        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in &words {
                *self
                    .postings
                    .entry((*word).to_string())
                    .or_default()
                    .entry(doc_id)
                    .or_insert(0.0) += inv_word_count;
            }
        }
        let rating = compute_average_rating(ratings);
        self.docs.insert(doc_id, DocumentRecord { rating, status });
        self.doc_ids.insert(slot, doc_id);
        tracing::debug!(doc_id, word_count = words.len(), rating, %status, "indexed document");
        Ok(())
    }

    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if self.stop_words.contains(word) {
                continue;
            }
            validate_word(word)?;
            words.push(word);
        }
        Ok(words)
    }

    pub fn document_count(&self) -> usize {
        self.docs.len()
    }

    /// Id of the `index`-th document in ascending id order.
    pub fn id_at(&self, index: usize) -> Result<DocId> {
        self.doc_ids
            .get(index)
            .copied()
            .ok_or(SearchError::IndexOutOfRange { index, count: self.doc_ids.len() })
    }

    /// Stored ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.doc_ids.iter().copied()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Postings for `word`; empty when the word was never indexed.
    pub fn postings_for(&self, word: &str) -> &Postings {
        self.postings.get(word).unwrap_or(&NO_POSTINGS)
    }

    pub fn record_for(&self, doc_id: DocId) -> Result<&DocumentRecord> {
        self.docs.get(&doc_id).ok_or(SearchError::DocumentNotFound(doc_id))
    }

    /// Every indexed word of `doc_id` with its term frequency, in word order.
    pub fn word_frequencies(&self, doc_id: DocId) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.postings
            .iter()
            .filter_map(move |(word, postings)| postings.get(&doc_id).map(|&tf| (word.as_str(), tf)))
    }
}
