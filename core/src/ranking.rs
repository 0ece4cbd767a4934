use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::DocId;
use std::collections::BTreeMap;

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this are ranked by rating instead.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Predicate matching documents with exactly `status`.
pub fn with_status(status: DocumentStatus) -> impl Fn(DocId, DocumentStatus, i32) -> bool {
    move |_, document_status, _| document_status == status
}

/// Inverse document frequency of a word found in `containing` of `total` documents.
fn inverse_document_freq(total: usize, containing: usize) -> f64 {
    (total as f64 / containing as f64).ln()
}

/// Score every document reachable through the plus words, then drop any
/// document holding a minus word. The predicate only gates scoring; minus
/// words veto regardless of it.
pub fn find_all_documents<P>(index: &InvertedIndex, query: &Query, predicate: P) -> Result<Vec<Document>>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool,
{
    let mut doc_to_relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for word in &query.plus_words {
        let postings = index.postings_for(word);
        if postings.is_empty() {
            continue;
        }
        let idf = inverse_document_freq(index.document_count(), postings.len());
        for (&doc_id, &term_freq) in postings {
            let record = index.record_for(doc_id)?;
            if predicate(doc_id, record.status, record.rating) {
                *doc_to_relevance.entry(doc_id).or_insert(0.0) += term_freq * idf;
            }
        }
    }

    for word in &query.minus_words {
        for doc_id in index.postings_for(word).keys() {
            doc_to_relevance.remove(doc_id);
        }
    }

    let mut matched = Vec::with_capacity(doc_to_relevance.len());
    for (doc_id, relevance) in doc_to_relevance {
        matched.push(Document::new(doc_id, relevance, index.record_for(doc_id)?.rating));
    }
    Ok(matched)
}

/// Order by relevance descending; runs of near-equal relevance (measured
/// from the first document of the run) are ordered by rating descending.
pub fn sort_documents(docs: &mut [Document]) {
    docs.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    let mut start = 0;
    while start < docs.len() {
        let anchor = docs[start].relevance;
        let mut end = start + 1;
        while end < docs.len() && (anchor - docs[end].relevance).abs() < RELEVANCE_EPSILON {
            end += 1;
        }
        docs[start..end].sort_by(|a, b| b.rating.cmp(&a.rating));
        start = end;
    }
}

/// Full ranking pipeline: score, sort, keep the top results.
pub fn rank_documents<P>(index: &InvertedIndex, query: &Query, predicate: P) -> Result<Vec<Document>>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool,
{
    let mut docs = find_all_documents(index, query, predicate)?;
    sort_documents(&mut docs);
    docs.truncate(MAX_RESULT_DOCUMENT_COUNT);
    tracing::debug!(
        plus = query.plus_words.len(),
        minus = query.minus_words.len(),
        hits = docs.len(),
        "ranked documents"
    );
    Ok(docs)
}
