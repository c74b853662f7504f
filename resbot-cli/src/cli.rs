//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "resbot")]
#[command(about = "Telegram resource bot: serves links and files behind inline buttons", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON config file (default: config.json, or RESBOT_CONFIG).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (token from config file; BOT_TOKEN or --token override it).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// JSON catalog file overriding the configured resources.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the resource catalog in display order.
    List {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Verify that every file resource exists; exits non-zero otherwise.
    Check {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

impl Cli {
    /// Loads the config file. A path given with `--config` or RESBOT_CONFIG must exist;
    /// the default `config.json` may be absent.
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let explicit = self
            .config
            .clone()
            .or_else(|| std::env::var("RESBOT_CONFIG").ok().map(PathBuf::from));
        match explicit {
            Some(path) => AppConfig::load(&path, true),
            None => AppConfig::load(PathBuf::from(DEFAULT_CONFIG_PATH).as_path(), false),
        }
    }
}
