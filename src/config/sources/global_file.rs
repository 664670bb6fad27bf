//! Global config file source: $XDG_CONFIG_HOME/chunkedit/config.toml

use super::EnvSnapshot;
use crate::config::paths::xdg_root;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;

/// Add the global config file to builder when a home directory can be resolved.
/// The file is optional.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    env: &EnvSnapshot,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg_root::global_config_path(env) {
        Some(path) => Ok(builder.add_source(File::from(path.as_path()).required(false))),
        None => Ok(builder),
    }
}
