//! NEO4J_* connection variables, the primary way to point the tool at a graph.

use super::EnvSnapshot;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;

/// Variable name to config key.
pub const CONNECTION_VARS: [(&str, &str); 4] = [
    ("NEO4J_URL", "graph.uri"),
    ("NEO4J_USER", "graph.user"),
    ("NEO4J_PASSWORD", "graph.password"),
    ("NEO4J_DB_NAME", "graph.database"),
];

/// Override connection keys with any NEO4J_* variables that are set and non-empty.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    env: &EnvSnapshot,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;
    for (var, key) in CONNECTION_VARS {
        builder = builder.set_override_option(key, env.get(var).map(str::to_string))?;
    }
    Ok(builder)
}
