//! Cypher templates for chunk search and update.
//!
//! Every user-supplied value travels as a bound parameter. The node label is
//! the only piece spliced into query text, and it is validated on
//! construction.

use crate::error::ApiError;
use crate::types::ChunkId;
use neo4rs::{query, Query};
use std::fmt;

/// A node label restricted to `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLabel(String);

impl NodeLabel {
    pub fn new(label: &str) -> Result<Self, ApiError> {
        let mut chars = label.chars();
        let valid_start = chars
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '_');
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ApiError::ValidationError(format!(
                "Invalid node label '{}': use letters, digits, and underscores",
                label
            )));
        }
        Ok(Self(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NodeLabel {
    fn default() -> Self {
        Self("CHUNK".to_string())
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cypher text for an AND-substring search over `$tokens`.
pub fn search_cypher(label: &NodeLabel) -> String {
    format!(
        "MATCH (n:`{}`) \
         WHERE all(token IN $tokens WHERE n.text CONTAINS token) \
         RETURN n.id AS id, n.text AS text",
        label
    )
}

/// Cypher text for setting the text of the node with id `$chunk_id`.
pub fn update_text_cypher(label: &NodeLabel) -> String {
    format!(
        "MATCH (n:`{}` {{id: $chunk_id}}) \
         SET n.text = $new_text \
         RETURN n.id AS id",
        label
    )
}

pub fn search_query(label: &NodeLabel, tokens: &[String]) -> Query {
    query(&search_cypher(label)).param("tokens", tokens.to_vec())
}

pub fn update_text_query(label: &NodeLabel, id: &ChunkId, text: &str) -> Query {
    query(&update_text_cypher(label))
        .param("chunk_id", id)
        .param("new_text", text)
}
