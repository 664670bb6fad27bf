//! Neo4j connection management.
//!
//! One connector is built at startup and shared by the services for the life
//! of the process. Queries are async under the hood; the connector owns a
//! small tokio runtime and blocks on each call, bounded by the configured
//! query timeout. Dropping the connector releases the pool.

use crate::error::ApiError;
use crate::graph::NodeLabel;
use neo4rs::{query, ConfigBuilder, Graph, Query, Row};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Complete connection settings.
#[derive(Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub label: NodeLabel,
    pub query_timeout: Duration,
    pub max_connections: usize,
    pub fetch_size: usize,
}

impl fmt::Debug for GraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphConfig")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("label", &self.label)
            .field("query_timeout", &self.query_timeout)
            .field("max_connections", &self.max_connections)
            .field("fetch_size", &self.fetch_size)
            .finish()
    }
}

/// Long-lived handle to the graph database.
pub struct GraphConnector {
    // Declared before `runtime` so the pool is dropped while the runtime is alive.
    graph: Graph,
    runtime: tokio::runtime::Runtime,
    query_timeout: Duration,
    uri: String,
}

impl GraphConnector {
    /// Connect with the given configuration.
    pub fn connect(config: &GraphConfig) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::ConnectionError(format!("Failed to create runtime: {}", e)))?;

        let neo_config = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .max_connections(config.max_connections)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| ApiError::ConnectionError(e.to_string()))?;

        let timeout = config.query_timeout;
        let graph = runtime
            .block_on(async { tokio::time::timeout(timeout, Graph::connect(neo_config)).await })
            .map_err(|_| {
                ApiError::ConnectionError(format!(
                    "Timed out connecting to {} after {}s",
                    config.uri,
                    timeout.as_secs()
                ))
            })?
            .map_err(|e| ApiError::ConnectionError(e.to_string()))?;

        info!(uri = %config.uri, database = %config.database, "Connected to graph");
        Ok(Self {
            graph,
            runtime,
            query_timeout: timeout,
            uri: config.uri.clone(),
        })
    }

    /// Run a read query and collect all rows.
    pub fn read(&self, query: Query) -> Result<Vec<Row>, ApiError> {
        self.collect_rows(query, "read")
    }

    /// Run a write query and collect the rows it returns.
    pub fn write(&self, query: Query) -> Result<Vec<Row>, ApiError> {
        self.collect_rows(query, "write")
    }

    /// Round-trip a trivial query to check reachability.
    pub fn ping(&self) -> Result<(), ApiError> {
        let rows = self.read(query("RETURN 1 AS ok"))?;
        if rows.is_empty() {
            return Err(ApiError::QueryError(
                "Connectivity check returned no rows".to_string(),
            ));
        }
        Ok(())
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    fn collect_rows(&self, query: Query, mode: &'static str) -> Result<Vec<Row>, ApiError> {
        let graph = &self.graph;
        let outcome = self.runtime.block_on(async {
            tokio::time::timeout(self.query_timeout, async {
                let mut stream = graph.execute(query).await?;
                let mut rows = Vec::new();
                while let Some(row) = stream.next().await? {
                    rows.push(row);
                }
                Ok::<_, neo4rs::Error>(rows)
            })
            .await
        });

        match outcome {
            Ok(Ok(rows)) => {
                debug!(mode, rows = rows.len(), "Query completed");
                Ok(rows)
            }
            Ok(Err(e)) => Err(ApiError::from(e)),
            Err(_) => Err(ApiError::ConnectionError(format!(
                "{} query timed out after {}s",
                mode,
                self.query_timeout.as_secs()
            ))),
        }
    }
}

impl Drop for GraphConnector {
    fn drop(&mut self) {
        debug!(uri = %self.uri, "Releasing graph connection pool");
    }
}
