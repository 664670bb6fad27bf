//! ChunkStore backed by Neo4j through the [`GraphConnector`].

use super::ChunkStore;
use crate::error::ApiError;
use crate::graph::{cypher, GraphConnector, NodeLabel};
use crate::types::{Chunk, ChunkId};
use neo4rs::Row;
use tracing::{debug, warn};

pub struct Neo4jChunkStore {
    connector: GraphConnector,
    label: NodeLabel,
}

impl Neo4jChunkStore {
    pub fn new(connector: GraphConnector, label: NodeLabel) -> Self {
        Self { connector, label }
    }

    pub fn connector(&self) -> &GraphConnector {
        &self.connector
    }

    pub fn label(&self) -> &NodeLabel {
        &self.label
    }
}

fn chunk_from_row(row: &Row) -> Result<Chunk, ApiError> {
    let id: ChunkId = row
        .get("id")
        .map_err(|e| ApiError::QueryError(format!("Unreadable chunk id: {}", e)))?;
    let text: String = row
        .get("text")
        .map_err(|e| ApiError::QueryError(format!("Unreadable text for chunk {}: {}", id, e)))?;
    Ok(Chunk { id, text })
}

/// Decode search rows. Ids come from outside this tool, so a node with a null
/// or non-scalar id or text is skipped rather than failing the whole search.
fn chunks_from_rows(rows: &[Row]) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for row in rows {
        match chunk_from_row(row) {
            Ok(chunk) => chunks.push(chunk),
            Err(e) => {
                debug!(error = %e, "Skipping undecodable row");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, kept = chunks.len(), "Skipped matches with unreadable id or text");
    }
    chunks
}

impl ChunkStore for Neo4jChunkStore {
    fn find_chunks(&self, tokens: &[String]) -> Result<Vec<Chunk>, ApiError> {
        let rows = self
            .connector
            .read(cypher::search_query(&self.label, tokens))?;
        Ok(chunks_from_rows(&rows))
    }

    fn update_text(&self, id: &ChunkId, text: &str) -> Result<(), ApiError> {
        let rows = self
            .connector
            .write(cypher::update_text_query(&self.label, id, text))?;
        match rows.len() {
            0 => Err(ApiError::NotFound(id.clone())),
            1 => {
                debug!(chunk_id = %id, "Chunk text updated");
                Ok(())
            }
            n => {
                // Ids are assigned outside this tool; duplicates get the same text.
                warn!(chunk_id = %id, matched = n, "Chunk id matched more than one node");
                Ok(())
            }
        }
    }

    fn check_connectivity(&self) -> Result<(), ApiError> {
        self.connector.ping()
    }
}
