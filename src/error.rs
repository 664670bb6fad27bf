//! Error types shared by the graph layer, services, and CLI.

use crate::types::ChunkId;
use thiserror::Error;

/// Errors surfaced to the operator.
///
/// "No results" is never an error; a search that matches nothing returns an
/// empty result list.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Chunk not found: {0}")]
    NotFound(ChunkId),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl ApiError {
    /// Short label naming the error kind, used in notices.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::ConnectionError(_) => "connection",
            ApiError::QueryError(_) => "query",
            ApiError::NotFound(_) => "not found",
            ApiError::ValidationError(_) => "validation",
            ApiError::ConfigError(_) => "config",
            ApiError::InputError(_) => "input",
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<neo4rs::Error> for ApiError {
    fn from(err: neo4rs::Error) -> Self {
        match err {
            neo4rs::Error::IOError { .. }
            | neo4rs::Error::ConnectionError
            | neo4rs::Error::AuthenticationError(_) => ApiError::ConnectionError(err.to_string()),
            other => ApiError::QueryError(other.to_string()),
        }
    }
}

impl From<dialoguer::Error> for ApiError {
    fn from(err: dialoguer::Error) -> Self {
        ApiError::InputError(format!("Failed to get user input: {}", err))
    }
}
