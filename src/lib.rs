//! Chunkedit: keyword search and in-place editing of text chunks in a graph.
//!
//! Finds nodes of one label whose `text` property contains every keyword
//! token, lists them in a paginated grid, and writes an edited `text` back to
//! a single node by id. Relationships are never touched.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod search;
pub mod session;
pub mod store;
pub mod summary;
pub mod tooling;
pub mod types;
