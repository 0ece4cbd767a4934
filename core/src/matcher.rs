use crate::document::DocumentStatus;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::DocId;

/// Plus words found in one document, and that document's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub matched_words: Vec<String>,
    pub status: DocumentStatus,
}

/// Report which plus words `doc_id` contains. A minus word present in the
/// document empties the list; the status is reported either way.
pub fn match_document(index: &InvertedIndex, query: &Query, doc_id: DocId) -> Result<MatchResult> {
    let status = index.record_for(doc_id)?.status;

    let vetoed = query
        .minus_words
        .iter()
        .any(|word| index.postings_for(word).contains_key(&doc_id));
    let matched_words = if vetoed {
        Vec::new()
    } else {
        query
            .plus_words
            .iter()
            .filter(|word| index.postings_for(word).contains_key(&doc_id))
            .cloned()
            .collect()
    };
    Ok(MatchResult { matched_words, status })
}
