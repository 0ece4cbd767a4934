use crate::error::{Result, SearchError};

/// Split text into words on single spaces, dropping empty fragments.
///
/// Only `' '` separates words; any other whitespace stays inside the word
/// and is later rejected by [`validate_word`].
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// Reject words containing characters below U+0020.
pub fn validate_word(word: &str) -> Result<()> {
    if word.chars().any(|c| c < ' ') {
        return Err(SearchError::InvalidWord(word.to_string()));
    }
    Ok(())
}
