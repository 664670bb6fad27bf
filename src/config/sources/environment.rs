//! Environment variable source: CHUNKEDIT_* prefix with __ separator

use super::EnvSnapshot;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses CHUNKEDIT__ prefix and __ as separator for nested keys,
/// e.g. `CHUNKEDIT__UI__ROWS_PER_PAGE=3`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    env: &EnvSnapshot,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("CHUNKEDIT")
            .separator("__")
            .try_parsing(true)
            .source(Some(env.vars().clone())),
    );
    Ok(builder)
}
