//! Config composition: default values and source ordering.

pub mod policy;
pub mod service;
