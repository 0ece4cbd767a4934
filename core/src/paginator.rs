use crate::error::{Result, SearchError};
use std::fmt;
use std::ops::Deref;

/// One fixed-size window over a result slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Deref for Page<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}

impl<'a, T> IntoIterator for Page<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Split `items` into consecutive pages of `page_size`; the last page may be
/// shorter. An empty slice has no pages.
pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Vec<Page<'_, T>>> {
    if page_size == 0 {
        return Err(SearchError::ZeroPageSize);
    }
    Ok(items.chunks(page_size).map(|items| Page { items }).collect())
}
