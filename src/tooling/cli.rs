//! CLI Tooling
//!
//! Command-line interface for chunk search and editing. Without a subcommand
//! the interactive session starts.

use crate::config::ChunkEditConfig;
use crate::error::ApiError;
use crate::graph::{GraphConfig, GraphConnector};
use crate::logging::LoggingOverrides;
use crate::search::{SearchOutcome, SearchService};
use crate::store::{ChunkStore, Neo4jChunkStore};
use crate::tooling::grid::ResultGrid;
use crate::tooling::interactive::{DialoguerPrompter, InteractiveRunner, Prompter};
use crate::types::ChunkId;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Chunkedit CLI - search and edit text chunks in a Neo4j graph
#[derive(Parser)]
#[command(name = "chunkedit")]
#[command(about = "Search text chunks in a Neo4j graph by keyword and edit them in place")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (replaces the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            verbose: self.verbose,
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }

    /// The command to run; the interactive session when none was given.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Search, select, edit, and save chunks interactively
    Interactive,
    /// Search chunks whose text contains every keyword token
    Search {
        /// Keyword tokens (all must appear in the text)
        keyword: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Replace the text of one chunk
    Save {
        /// Chunk id (all digits = integer id, otherwise string id)
        #[arg(long)]
        id: String,
        /// New text
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,
        /// Read the new text from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show connection settings (optional connectivity check)
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Run a trivial query against the graph
        #[arg(long)]
        test_connectivity: bool,
    },
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Interactive => "interactive",
        Commands::Search { .. } => "search",
        Commands::Save { .. } => "save",
        Commands::Status { .. } => "status",
    }
}

/// CLI context: the loaded config and the one store shared by every command.
pub struct CliContext {
    config: ChunkEditConfig,
    graph: Option<GraphConfig>,
    store: Arc<dyn ChunkStore>,
}

impl CliContext {
    /// Connect using an already-loaded configuration. Missing connection
    /// settings fail here, before any query is attempted.
    pub fn from_config(config: ChunkEditConfig) -> Result<Self, ApiError> {
        config.ui.validate()?;
        let graph = config.graph.resolve()?;
        let connector = GraphConnector::connect(&graph)?;
        let store: Arc<dyn ChunkStore> =
            Arc::new(Neo4jChunkStore::new(connector, graph.label.clone()));
        Ok(Self {
            config,
            graph: Some(graph),
            store,
        })
    }

    /// Build a context over an existing store.
    pub fn with_store(store: Arc<dyn ChunkStore>, config: ChunkEditConfig) -> Self {
        Self {
            config,
            graph: None,
            store,
        }
    }

    pub fn config(&self) -> &ChunkEditConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn ChunkStore> {
        &self.store
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = match command {
            Commands::Interactive => self.run_interactive(&mut DialoguerPrompter),
            Commands::Search { keyword, format } => self.handle_search(&keyword.join(" "), format),
            Commands::Save { id, text, file } => {
                self.handle_save(id, text.as_deref(), file.as_ref())
            }
            Commands::Status {
                format,
                test_connectivity,
            } => self.handle_status(format, *test_connectivity),
        };
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    /// Run the interactive session on the given prompter.
    pub fn run_interactive(&self, prompter: &mut dyn Prompter) -> Result<String, ApiError> {
        let runner = InteractiveRunner::new(
            SearchService::new(Arc::clone(&self.store)),
            self.store.as_ref(),
            &self.config.ui,
        );
        runner.run(prompter)?;
        Ok("Session ended.".to_string())
    }

    fn handle_search(&self, keyword: &str, format: &str) -> Result<String, ApiError> {
        let service = SearchService::new(Arc::clone(&self.store));
        let outcome = service.search(keyword)?;
        if format == "json" {
            let out = json!({
                "keyword": keyword,
                "query_issued": outcome != SearchOutcome::NoQuery,
                "results": outcome.chunks(),
            });
            return serde_json::to_string_pretty(&out)
                .map_err(|e| ApiError::QueryError(format!("Failed to encode results: {}", e)));
        }
        match outcome {
            SearchOutcome::NoQuery => Ok("No keyword given; no query issued.".to_string()),
            SearchOutcome::Results(chunks) if chunks.is_empty() => {
                Ok(format!("No chunks found for '{}'.", keyword))
            }
            SearchOutcome::Results(chunks) => {
                let grid = ResultGrid::new(&chunks, &self.config.ui);
                Ok(format!(
                    "Found {} chunks for '{}':\n{}",
                    chunks.len(),
                    keyword,
                    grid.render_all()
                ))
            }
        }
    }

    fn handle_save(
        &self,
        id: &str,
        text: Option<&str>,
        file: Option<&PathBuf>,
    ) -> Result<String, ApiError> {
        let id: ChunkId = id.parse()?;
        let new_text = match (text, file) {
            (Some(text), None) => text.to_string(),
            (None, Some(path)) => std::fs::read_to_string(path).map_err(|e| {
                ApiError::ValidationError(format!("Failed to read {}: {}", path.display(), e))
            })?,
            _ => {
                return Err(ApiError::ValidationError(
                    "Give exactly one of --text or --file".to_string(),
                ))
            }
        };
        self.store.update_text(&id, &new_text)?;
        info!(chunk_id = %id, "Chunk saved");
        Ok(format!("Chunk {} updated.", id))
    }

    fn handle_status(&self, format: &str, test_connectivity: bool) -> Result<String, ApiError> {
        let connectivity = if test_connectivity {
            Some(self.store.check_connectivity())
        } else {
            None
        };

        if format == "json" {
            let graph = self.graph.as_ref().map(|g| {
                json!({
                    "uri": g.uri,
                    "user": g.user,
                    "password": "***",
                    "database": g.database,
                    "label": g.label.as_str(),
                    "query_timeout_secs": g.query_timeout.as_secs(),
                })
            });
            let connectivity = connectivity.map(|r| match r {
                Ok(()) => json!({ "reachable": true }),
                Err(e) => json!({ "reachable": false, "error": e.to_string() }),
            });
            let out = json!({
                "backend": if self.graph.is_some() { "neo4j" } else { "in-memory" },
                "graph": graph,
                "connectivity": connectivity,
                "ui": {
                    "rows_per_page": self.config.ui.rows_per_page,
                    "preview_length": self.config.ui.preview_length,
                },
            });
            return serde_json::to_string_pretty(&out)
                .map_err(|e| ApiError::QueryError(format!("Failed to encode status: {}", e)));
        }

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Setting", "Value"]);
        match &self.graph {
            Some(g) => {
                table.add_row(vec!["Backend".to_string(), "neo4j".to_string()]);
                table.add_row(vec!["URI".to_string(), g.uri.clone()]);
                table.add_row(vec!["User".to_string(), g.user.clone()]);
                table.add_row(vec!["Password".to_string(), "***".to_string()]);
                table.add_row(vec!["Database".to_string(), g.database.clone()]);
                table.add_row(vec!["Label".to_string(), g.label.to_string()]);
                table.add_row(vec![
                    "Query timeout".to_string(),
                    format!("{}s", g.query_timeout.as_secs()),
                ]);
            }
            None => {
                table.add_row(vec!["Backend".to_string(), "in-memory".to_string()]);
            }
        }
        table.add_row(vec![
            "Rows per page".to_string(),
            self.config.ui.rows_per_page.to_string(),
        ]);

        let mut out = format!("{}\n\n{}", "Chunkedit Status".bold().underline(), table);
        if let Some(result) = connectivity {
            match result {
                Ok(()) => out.push_str(&format!("\n\nConnectivity: {}", "ok".green())),
                Err(e) => out.push_str(&format!("\n\nConnectivity: {} ({})", "failed".red(), e)),
            }
        }
        Ok(out)
    }
}
