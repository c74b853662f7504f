//! App config: JSON config file overlaid with environment variables.
//!
//! File fields: `telegram_bot_token`, `telegram_api_url`, `log_file`, `resource_dir`, `catalog_file`,
//! `resources`, `echo`. Env overrides: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE,
//! RESOURCE_DIR.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use resbot_catalog::{Catalog, ResourceEntry};
use resbot_telegram::TelegramConfig;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_LOG_FILE: &str = "logs/resbot.log";

/// On-disk shape of the config file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub telegram_bot_token: Option<String>,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
    pub resource_dir: Option<PathBuf>,
    pub catalog_file: Option<PathBuf>,
    pub resources: Option<Vec<ResourceEntry>>,
    #[serde(default)]
    pub echo: bool,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Where the catalog comes from, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    File(PathBuf),
    Inline(Vec<ResourceEntry>),
    Builtin,
}

/// Resolved app config.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bot_token: Option<String>,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    pub resource_dir: PathBuf,
    pub echo: bool,
    pub catalog_source: CatalogSource,
}

impl AppConfig {
    /// Loads `path` and overlays env. A missing file is an error only when `required`.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        let file = if path.exists() || required {
            ConfigFile::read(path)?
        } else {
            ConfigFile::default()
        };
        Ok(Self::from_file(file))
    }

    /// Overlays env on a parsed config file.
    pub fn from_file(file: ConfigFile) -> Self {
        let bot_token = env::var("BOT_TOKEN").ok().or(file.telegram_bot_token);
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .or(file.telegram_api_url);
        let log_file = env::var("LOG_FILE")
            .ok()
            .or(file.log_file)
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let resource_dir = env::var("RESOURCE_DIR")
            .ok()
            .map(PathBuf::from)
            .or(file.resource_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let catalog_source = match (file.catalog_file, file.resources) {
            (Some(path), _) => CatalogSource::File(path),
            (None, Some(entries)) => CatalogSource::Inline(entries),
            (None, None) => CatalogSource::Builtin,
        };

        Self {
            bot_token,
            telegram_api_url,
            log_file,
            resource_dir,
            echo: file.echo,
            catalog_source,
        }
    }

    /// `--token` overrides every other token source.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        if token.is_some() {
            self.bot_token = token;
        }
        self
    }

    /// `--catalog` overrides the configured catalog.
    pub fn with_catalog_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.catalog_source = CatalogSource::File(path);
        }
        self
    }

    /// Telegram connectivity config; fails when no token is configured anywhere.
    pub fn telegram_config(&self) -> Result<TelegramConfig> {
        let bot_token = self.bot_token.clone().ok_or_else(|| {
            anyhow::anyhow!(
                "No bot token: set telegram_bot_token in the config file, BOT_TOKEN, or --token"
            )
        })?;
        let config =
            TelegramConfig::with_token(bot_token).with_api_url(self.telegram_api_url.clone());
        config.validate()?;
        Ok(config)
    }

    /// Builds the catalog from its configured source.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog_source {
            CatalogSource::File(path) => Catalog::load(path)?,
            CatalogSource::Inline(entries) => Catalog::from_entries(entries.clone())
                .context("Invalid resources in config file")?,
            CatalogSource::Builtin => Catalog::builtin(),
        };
        Ok(catalog)
    }
}
