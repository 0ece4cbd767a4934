use crate::error::{Result, SearchError};
use crate::stop_words::StopWords;
use crate::tokenizer::{split_into_words, validate_word};
use std::collections::BTreeSet;

/// Parsed query: words a hit must contribute through, and words that veto it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

struct QueryWord<'a> {
    text: &'a str,
    is_minus: bool,
}

fn parse_query_word(token: &str) -> Result<QueryWord<'_>> {
    let (text, is_minus) = match token.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (token, false),
    };
    if is_minus {
        if text.is_empty() {
            return Err(SearchError::EmptyMinusWord);
        }
        if text.starts_with('-') {
            return Err(SearchError::DoubleMinus(token.to_string()));
        }
    }
    validate_word(text)?;
    Ok(QueryWord { text, is_minus })
}

/// Parse raw query text. Syntax is checked on every token, stop words
/// included; stop words are dropped afterwards.
pub fn parse_query(raw_query: &str, stop_words: &StopWords) -> Result<Query> {
    if raw_query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    let mut query = Query::default();
    for token in split_into_words(raw_query) {
        let word = parse_query_word(token)?;
        if stop_words.contains(word.text) {
            continue;
        }
        if word.is_minus {
            query.minus_words.insert(word.text.to_string());
        } else {
            query.plus_words.insert(word.text.to_string());
        }
    }
    Ok(query)
}
