//! Tooling & Integration Layer
//!
//! The command-line surface: argument parsing, the interactive session, and
//! the result grid shared by both.

pub mod cli;
pub mod grid;
pub mod interactive;

pub use cli::{Cli, CliContext, Commands};
pub use grid::{ResultGrid, GRID_COLUMNS};
pub use interactive::{DialoguerPrompter, InteractiveRunner, Notice, Prompter};
