//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::sources::EnvSnapshot;
use super::ChunkEditConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
///
/// Precedence, lowest to highest: defaults, config file, `CHUNKEDIT__*`
/// environment overlay, `NEO4J_*` connection variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global config file and the process environment.
    pub fn load() -> Result<ChunkEditConfig, ApiError> {
        Self::load_with_env(&EnvSnapshot::from_process())
    }

    /// Load configuration against an explicit environment snapshot.
    pub fn load_with_env(env: &EnvSnapshot) -> Result<ChunkEditConfig, ApiError> {
        MergeService::load(env)
    }

    /// Load configuration from a specific file plus the process environment.
    pub fn load_from_file(path: &Path) -> Result<ChunkEditConfig, ApiError> {
        Self::load_from_file_with_env(path, &EnvSnapshot::from_process())
    }

    pub fn load_from_file_with_env(
        path: &Path,
        env: &EnvSnapshot,
    ) -> Result<ChunkEditConfig, ApiError> {
        MergeService::load_from_file(path, env)
    }

    /// Create default configuration.
    pub fn default() -> ChunkEditConfig {
        ChunkEditConfig::default()
    }
}
