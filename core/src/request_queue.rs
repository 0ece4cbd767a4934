use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::server::SearchServer;
use crate::DocId;
use std::collections::VecDeque;

/// Requests kept in the window: one per minute of a day.
pub const REQUEST_WINDOW: usize = 1440;

#[derive(Debug, Clone, Copy)]
struct QueryOutcome {
    is_empty: bool,
}

/// Sliding window over the most recent find requests that tracks how many
/// of them returned nothing.
#[derive(Debug)]
pub struct RequestQueue<'s> {
    server: &'s SearchServer,
    requests: VecDeque<QueryOutcome>,
    no_result_count: usize,
}

impl<'s> RequestQueue<'s> {
    pub fn new(server: &'s SearchServer) -> Self {
        Self { server, requests: VecDeque::with_capacity(REQUEST_WINDOW), no_result_count: 0 }
    }

    /// Run a predicate query and record its outcome. Failed queries are not recorded.
    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let docs = self.server.find_top_documents_with(raw_query, predicate)?;
        self.record(docs.is_empty());
        Ok(docs)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        let docs = self.server.find_top_documents_by_status(raw_query, status)?;
        self.record(docs.is_empty());
        Ok(docs)
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_by_status(raw_query, DocumentStatus::Actual)
    }

    /// Empty-result requests currently in the window.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn record(&mut self, is_empty: bool) {
        if self.requests.len() == REQUEST_WINDOW {
            if let Some(evicted) = self.requests.pop_front() {
                if evicted.is_empty {
                    self.no_result_count -= 1;
                }
            }
        }
        if is_empty {
            self.no_result_count += 1;
        }
        self.requests.push_back(QueryOutcome { is_empty });
    }
}
