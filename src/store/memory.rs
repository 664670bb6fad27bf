//! In-process ChunkStore.
//!
//! Holds chunks in insertion order, which stands in for backend order. Used by
//! tests and for exercising the workflow without a database.

use super::{matches_all_tokens, ChunkStore};
use crate::error::ApiError;
use crate::types::{Chunk, ChunkId};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
pub struct MemoryChunkStore {
    chunks: RwLock<Vec<Chunk>>,
    queries: AtomicUsize,
    offline: AtomicBool,
}

impl MemoryChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunks<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = Chunk>,
    {
        let store = Self::new();
        for chunk in chunks {
            store.insert(chunk);
        }
        store
    }

    /// Insert a chunk, replacing any chunk with the same id in place.
    pub fn insert(&self, chunk: Chunk) {
        let mut chunks = self.chunks.write();
        match chunks.iter_mut().find(|c| c.id == chunk.id) {
            Some(existing) => *existing = chunk,
            None => chunks.push(chunk),
        }
    }

    /// Remove a chunk, as another process deleting the node would.
    pub fn remove(&self, id: &ChunkId) -> Option<Chunk> {
        let mut chunks = self.chunks.write();
        let index = chunks.iter().position(|c| &c.id == id)?;
        Some(chunks.remove(index))
    }

    pub fn get(&self, id: &ChunkId) -> Option<Chunk> {
        self.chunks.read().iter().find(|c| &c.id == id).cloned()
    }

    /// Simulate losing the connection: every query fails while set.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of queries issued, successful or not.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn begin_query(&self) -> Result<(), ApiError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::ConnectionError(
                "In-memory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

impl ChunkStore for MemoryChunkStore {
    fn find_chunks(&self, tokens: &[String]) -> Result<Vec<Chunk>, ApiError> {
        self.begin_query()?;
        Ok(self
            .chunks
            .read()
            .iter()
            .filter(|c| matches_all_tokens(&c.text, tokens))
            .cloned()
            .collect())
    }

    fn update_text(&self, id: &ChunkId, text: &str) -> Result<(), ApiError> {
        self.begin_query()?;
        let mut chunks = self.chunks.write();
        let mut matched = false;
        for chunk in chunks.iter_mut().filter(|c| &c.id == id) {
            chunk.text = text.to_string();
            matched = true;
        }
        if matched {
            Ok(())
        } else {
            Err(ApiError::NotFound(id.clone()))
        }
    }

    fn check_connectivity(&self) -> Result<(), ApiError> {
        self.begin_query()
    }
}
