//! Keyword search over chunk text.

use crate::error::ApiError;
use crate::store::ChunkStore;
use crate::types::Chunk;
use std::sync::Arc;
use tracing::info;

/// Result of one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The keyword had no tokens; nothing was sent to the backend.
    NoQuery,
    /// The query ran. An empty list means no chunk matched.
    Results(Vec<Chunk>),
}

impl SearchOutcome {
    pub fn chunks(&self) -> &[Chunk] {
        match self {
            SearchOutcome::NoQuery => &[],
            SearchOutcome::Results(chunks) => chunks,
        }
    }
}

/// Split a keyword on whitespace into search tokens.
pub fn tokenize(keyword: &str) -> Vec<String> {
    keyword.split_whitespace().map(str::to_string).collect()
}

pub struct SearchService {
    store: Arc<dyn ChunkStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn ChunkStore>) -> Self {
        Self { store }
    }

    /// Find chunks whose text contains every whitespace-separated token of
    /// `keyword`. Backend failures are returned as errors, never as an empty
    /// result.
    pub fn search(&self, keyword: &str) -> Result<SearchOutcome, ApiError> {
        let tokens = tokenize(keyword);
        if tokens.is_empty() {
            return Ok(SearchOutcome::NoQuery);
        }
        let chunks = self.store.find_chunks(&tokens)?;
        info!(tokens = tokens.len(), results = chunks.len(), "Keyword search");
        Ok(SearchOutcome::Results(chunks))
    }
}
