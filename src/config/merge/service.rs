//! MergeService: orchestrates sources, applies merge policy, deserializes to ChunkEditConfig.

use crate::config::sources::{connection_env, environment, global_file, EnvSnapshot};
use crate::config::ChunkEditConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

use super::policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: global file (lowest) -> CHUNKEDIT__ overlay -> NEO4J_* variables (highest).
    pub fn load(env: &EnvSnapshot) -> Result<ChunkEditConfig, ApiError> {
        let builder = policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, env)?;
        let builder = environment::add_to_builder(builder, env)?;
        let builder = connection_env::add_to_builder(builder, env)?;

        let config: ChunkEditConfig = builder.build()?.try_deserialize()?;
        debug!(label = %config.graph.label, "Configuration loaded");
        Ok(config)
    }

    /// Load config from a specific file with environment overlays.
    /// The file replaces the global file and must exist.
    pub fn load_from_file(path: &Path, env: &EnvSnapshot) -> Result<ChunkEditConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder, env)?;
        let builder = connection_env::add_to_builder(builder, env)?;

        let config: ChunkEditConfig = builder.build()?.try_deserialize()?;
        debug!(path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
