//! Built-in defaults, applied beneath every other source.

use crate::config::{
    default_fetch_size, default_label, default_max_connections, default_query_timeout_secs,
    default_rows_per_page,
};
use crate::summary::DEFAULT_PREVIEW_LENGTH;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Start a builder seeded with default values.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("graph.label", default_label())?
        .set_default("graph.query_timeout_secs", default_query_timeout_secs())?
        .set_default("graph.max_connections", default_max_connections() as u64)?
        .set_default("graph.fetch_size", default_fetch_size() as u64)?
        .set_default("ui.rows_per_page", default_rows_per_page() as u64)?
        .set_default("ui.preview_length", DEFAULT_PREVIEW_LENGTH as u64)
}
