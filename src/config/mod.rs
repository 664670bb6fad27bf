//! Configuration
//!
//! Layered configuration for the graph connection, the result grid, and
//! logging. See [`ConfigLoader`] for source precedence.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use sources::EnvSnapshot;

use crate::error::ApiError;
use crate::graph::{GraphConfig, NodeLabel};
use crate::logging::LoggingConfig;
use crate::summary::DEFAULT_PREVIEW_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkEditConfig {
    #[serde(default)]
    pub graph: GraphSection,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[graph]` section as loaded; connection values may still be missing.
#[derive(Clone, Serialize, Deserialize)]
pub struct GraphSection {
    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub database: Option<String>,

    /// Label of the text-bearing nodes.
    #[serde(default = "default_label")]
    pub label: String,

    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

pub(crate) fn default_label() -> String {
    "CHUNK".to_string()
}

pub(crate) fn default_query_timeout_secs() -> u64 {
    30
}

pub(crate) fn default_max_connections() -> usize {
    4
}

pub(crate) fn default_fetch_size() -> usize {
    200
}

impl Default for GraphSection {
    fn default() -> Self {
        Self {
            uri: None,
            user: None,
            password: None,
            database: None,
            label: default_label(),
            query_timeout_secs: default_query_timeout_secs(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl fmt::Debug for GraphSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphSection")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("label", &self.label)
            .field("query_timeout_secs", &self.query_timeout_secs)
            .field("max_connections", &self.max_connections)
            .field("fetch_size", &self.fetch_size)
            .finish()
    }
}

impl GraphSection {
    /// Resolve into a complete connection config.
    ///
    /// Every missing required value is reported in one error, together with
    /// the environment variable that supplies it.
    pub fn resolve(&self) -> Result<GraphConfig, ApiError> {
        let required = [
            ("graph.uri", "NEO4J_URL", &self.uri),
            ("graph.user", "NEO4J_USER", &self.user),
            ("graph.password", "NEO4J_PASSWORD", &self.password),
            ("graph.database", "NEO4J_DB_NAME", &self.database),
        ];
        let missing: Vec<String> = required
            .iter()
            .filter(|(_, _, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
            .map(|(key, env, _)| format!("{} ({})", key, env))
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::ConfigError(format!(
                "Missing required connection settings: {}",
                missing.join(", ")
            )));
        }

        if self.query_timeout_secs == 0 {
            return Err(ApiError::ConfigError(
                "graph.query_timeout_secs must be greater than 0".to_string(),
            ));
        }

        let label = NodeLabel::new(&self.label)?;

        Ok(GraphConfig {
            uri: self.uri.clone().unwrap_or_default(),
            user: self.user.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            database: self.database.clone().unwrap_or_default(),
            label,
            query_timeout: Duration::from_secs(self.query_timeout_secs),
            max_connections: self.max_connections.max(1),
            fetch_size: self.fetch_size.max(1),
        })
    }
}

/// `[ui]` section: result grid layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Grid rows shown per page; each row holds four results.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,

    /// Text longer than this is shown as a head+tail preview.
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
}

pub(crate) fn default_rows_per_page() -> usize {
    5
}

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
            preview_length: default_preview_length(),
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.rows_per_page == 0 {
            return Err(ApiError::ConfigError(
                "ui.rows_per_page must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
