use crate::error::{Result, SearchError};
use crate::tokenizer::{split_into_words, validate_word};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Words excluded from both indexing and querying. Fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Build from a collection of words. Every word is validated; empty
    /// strings are dropped and duplicates collapse.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            validate_word(word)?;
            if !word.is_empty() {
                set.insert(word.to_string());
            }
        }
        Ok(Self { words: set })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Parses a single space-delimited string of stop words.
impl FromStr for StopWords {
    type Err = SearchError;

    fn from_str(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }
}
