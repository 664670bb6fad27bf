//! Configuration sources and the environment snapshot they read from.

pub mod connection_env;
pub mod environment;
pub mod global_file;

use std::collections::HashMap;

/// Point-in-time copy of environment variables.
///
/// Sources read from a snapshot instead of the live process environment so
/// loading is deterministic and testable.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of `key`, treating empty strings as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub(crate) fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}
