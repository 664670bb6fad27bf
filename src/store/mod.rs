//! Chunk Store
//!
//! The two operations the rest of the tool needs from the graph: find chunks
//! whose text contains every token, and replace the text of one chunk.

pub mod memory;
pub mod neo4j;

pub use memory::MemoryChunkStore;
pub use neo4j::Neo4jChunkStore;

use crate::error::ApiError;
use crate::types::{Chunk, ChunkId};

/// Chunk Store interface
pub trait ChunkStore: Send + Sync {
    /// All chunks whose text contains every token as a case-sensitive
    /// substring, in backend order. `tokens` is never empty.
    fn find_chunks(&self, tokens: &[String]) -> Result<Vec<Chunk>, ApiError>;

    /// Set the text of the chunk with `id`. Fails with `NotFound` when no such
    /// chunk exists.
    fn update_text(&self, id: &ChunkId, text: &str) -> Result<(), ApiError>;

    /// Check that the backend is reachable.
    fn check_connectivity(&self) -> Result<(), ApiError>;
}

/// AND-substring match shared by in-process stores.
pub fn matches_all_tokens(text: &str, tokens: &[String]) -> bool {
    tokens.iter().all(|token| text.contains(token.as_str()))
}
