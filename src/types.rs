//! Core types for chunk search and editing.

use crate::error::ApiError;
use neo4rs::BoltType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ChunkId: opaque node identifier assigned outside this tool.
///
/// Graphs in the wild store either integers or strings in the `id`
/// property, so both are carried verbatim and bound back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkId::Int(value) => write!(f, "{}", value),
            ChunkId::Text(value) => f.write_str(value),
        }
    }
}

impl FromStr for ChunkId {
    type Err = ApiError;

    /// All-digit input (with optional leading `-`) is an integer id; anything
    /// else is a string id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ApiError::ValidationError(
                "Chunk id cannot be empty".to_string(),
            ));
        }
        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(value) = trimmed.parse::<i64>() {
                return Ok(ChunkId::Int(value));
            }
        }
        Ok(ChunkId::Text(trimmed.to_string()))
    }
}

impl From<&ChunkId> for BoltType {
    fn from(id: &ChunkId) -> Self {
        match id {
            ChunkId::Int(value) => BoltType::from(*value),
            ChunkId::Text(value) => BoltType::from(value.clone()),
        }
    }
}

/// Chunk: one text-bearing node, as projected by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    pub text: String,
}

impl Chunk {
    pub fn new(id: ChunkId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
