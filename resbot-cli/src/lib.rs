//! # resbot-cli
//!
//! CLI foundation: argument parsing, config loading, and the run/list/check subcommands.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_router, check_resources, list_resources, run_bot};
pub use cli::{Cli, Commands};
pub use config::{AppConfig, CatalogSource, ConfigFile};
