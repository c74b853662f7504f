//! Subcommand implementations: wire config, catalog, handler, router and Telegram runner.

use std::sync::Arc;

use anyhow::Result;
use resbot_catalog::{Catalog, ResourceDescriptor};
use resbot_core::init_tracing;
use resbot_dispatch::{EventRouter, ResourceHandler};
use resbot_telegram::{run_dispatcher, TelegramBotAdapter};
use tracing::{info, instrument, warn};

use crate::config::AppConfig;

/// Builds the router serving `catalog` through `bot`. Split out so tests can drive it with a mock Bot.
pub fn build_router(
    config: &AppConfig,
    catalog: Arc<Catalog>,
    bot: Arc<dyn resbot_core::Bot>,
) -> EventRouter {
    let handler = ResourceHandler::new(catalog, bot)
        .with_resource_dir(config.resource_dir.clone())
        .with_echo(config.echo);
    EventRouter::new().with_handler(Arc::new(handler))
}

/// Main entry: init logging, validate config, load catalog, then run the Telegram dispatcher.
#[instrument(skip(config))]
pub async fn run_bot(config: AppConfig) -> Result<()> {
    let telegram = config.telegram_config()?;
    init_tracing(&config.log_file)?;

    let catalog = Arc::new(config.load_catalog()?);
    info!(
        resources = catalog.len(),
        resource_dir = %config.resource_dir.display(),
        "Catalog loaded"
    );
    for (key, path) in catalog.missing_files(&config.resource_dir) {
        warn!(key = %key, path = %path.display(), "Resource file missing");
    }

    let teloxide_bot = telegram.build_bot()?;
    let adapter: Arc<dyn resbot_core::Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let router = build_router(&config, catalog, adapter);

    info!("Bot started successfully");
    run_dispatcher(teloxide_bot, router).await
}

/// One line per catalog entry, in display order.
pub fn format_catalog(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|(key, descriptor)| match descriptor {
            ResourceDescriptor::Link { url } => format!("{}\tlink\t{}", key, url),
            ResourceDescriptor::File { path } => format!("{}\tfile\t{}", key, path.display()),
        })
        .collect()
}

pub fn list_resources(config: &AppConfig) -> Result<()> {
    let catalog = config.load_catalog()?;
    if catalog.is_empty() {
        println!("No resources configured.");
        return Ok(());
    }
    for line in format_catalog(&catalog) {
        println!("{}", line);
    }
    Ok(())
}

/// Fails when any file resource is missing, listing each one.
pub fn check_resources(config: &AppConfig) -> Result<()> {
    let catalog = config.load_catalog()?;
    let missing = catalog.missing_files(&config.resource_dir);
    if missing.is_empty() {
        println!("All {} resource(s) available.", catalog.len());
        return Ok(());
    }
    for (key, path) in &missing {
        println!("missing\t{}\t{}", key, path.display());
    }
    anyhow::bail!(
        "{} of {} resource file(s) missing",
        missing.len(),
        catalog.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogSource, ConfigFile};
    use async_trait::async_trait;
    use resbot_catalog::{ResourceEntry, ResourceKey};
    use resbot_core::{Chat, Document, InboundEvent, Requester, SelectableItem, User};
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records uploaded documents; text and choices are ignored.
    #[derive(Default)]
    struct DocumentBot {
        documents: Mutex<Vec<Document>>,
    }

    #[async_trait]
    impl resbot_core::Bot for DocumentBot {
        async fn send_message(&self, _chat: &Chat, _text: &str) -> resbot_core::Result<()> {
            Ok(())
        }
        async fn send_choices(
            &self,
            _chat: &Chat,
            _text: &str,
            _items: &[SelectableItem],
        ) -> resbot_core::Result<()> {
            Ok(())
        }
        async fn send_document(&self, _chat: &Chat, document: Document) -> resbot_core::Result<()> {
            self.documents.lock().unwrap().push(document);
            Ok(())
        }
        async fn send_greeting(
            &self,
            _chat: &Chat,
            _user: &User,
            _name: &str,
        ) -> resbot_core::Result<()> {
            Ok(())
        }
    }

    fn config_with(dir: &TempDir, entries: Vec<ResourceEntry>) -> AppConfig {
        let mut config = AppConfig::from_file(ConfigFile::default());
        config.resource_dir = dir.path().to_path_buf();
        config.catalog_source = CatalogSource::Inline(entries);
        config
    }

    fn key(s: &str) -> ResourceKey {
        ResourceKey::parse(s).unwrap()
    }

    #[test]
    fn test_format_catalog() {
        let lines = format_catalog(&Catalog::builtin());
        assert_eq!(
            lines,
            vec![
                "keyword1\tlink\thttps://example.com/file1.pdf",
                "keyword2\tlink\thttps://example.com/file2.txt",
            ]
        );
    }

    /// **Test: the built router resolves relative file paths against the configured resource_dir.**
    #[tokio::test]
    async fn test_build_router_uses_resource_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bitcoin.pdf"), b"%PDF-1.4").unwrap();
        let config = config_with(&dir, vec![ResourceEntry::file(key("Bitcoin"), "bitcoin.pdf")]);

        let bot = Arc::new(DocumentBot::default());
        let router = build_router(&config, Arc::new(config.load_catalog().unwrap()), bot.clone());
        let requester = Requester {
            user: User {
                id: 1,
                username: None,
                first_name: Some("Ada".to_string()),
                last_name: None,
            },
            chat: Chat {
                id: 1,
                chat_type: "private".to_string(),
            },
        };
        router
            .dispatch(&InboundEvent::Selection {
                requester,
                payload: "Bitcoin".to_string(),
            })
            .await
            .unwrap();

        let documents = bot.documents.lock().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].bytes, b"%PDF-1.4".to_vec());
    }

    #[test]
    fn test_check_resources() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bitcoin.pdf"), b"%PDF").unwrap();

        let ok = config_with(&dir, vec![ResourceEntry::file(key("Bitcoin"), "bitcoin.pdf")]);
        assert!(check_resources(&ok).is_ok());

        let broken = config_with(
            &dir,
            vec![
                ResourceEntry::file(key("Bitcoin"), "bitcoin.pdf"),
                ResourceEntry::file(key("Ethereum"), "ethereum.pdf"),
            ],
        );
        let err = check_resources(&broken).unwrap_err();
        assert!(err.to_string().contains("1 of 2"));
    }
}
