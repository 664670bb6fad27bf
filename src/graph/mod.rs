//! Graph connection and Cypher query construction.

pub mod connector;
pub mod cypher;

pub use connector::{GraphConfig, GraphConnector};
pub use cypher::NodeLabel;
