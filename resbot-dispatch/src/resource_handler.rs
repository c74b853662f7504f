//! [`ResourceHandler`]: serves the catalog as buttons and delivers the selected resource.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use resbot_catalog::{resolve_file_path, Catalog, ResourceDescriptor};
use resbot_core::{
    Bot, Document, EventHandler, HandlerError, Requester, Result, SelectableItem,
};
use tracing::{error, info, instrument, warn};

use crate::messages;

/// Stateless handler over a read-only catalog. Replies go through the injected [`Bot`].
pub struct ResourceHandler {
    catalog: Arc<Catalog>,
    bot: Arc<dyn Bot>,
    /// Base for relative `File` paths.
    resource_dir: PathBuf,
    echo: bool,
}

impl ResourceHandler {
    pub fn new(catalog: Arc<Catalog>, bot: Arc<dyn Bot>) -> Self {
        Self {
            catalog,
            bot,
            resource_dir: PathBuf::from("."),
            echo: false,
        }
    }

    pub fn with_resource_dir(mut self, resource_dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = resource_dir.into();
        self
    }

    /// Whether plain text messages are echoed back (default false).
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// One item per catalog key, in display order; label and payload are the key.
    pub fn selectable_items(&self) -> Vec<SelectableItem> {
        self.catalog
            .keys()
            .map(|key| SelectableItem::keyed(key.as_str()))
            .collect()
    }

    async fn deliver_file(&self, requester: &Requester, key: &str, path: &Path) -> Result<()> {
        match read_document(path).await {
            Ok(document) => {
                info!(
                    user_id = requester.user.id,
                    key = %key,
                    path = %path.display(),
                    bytes = document.bytes.len(),
                    "Sending resource file"
                );
                self.bot.send_document(&requester.chat, document).await
            }
            Err(e) => {
                error!(
                    error = %e,
                    user_id = requester.user.id,
                    key = %key,
                    "Resource file unavailable"
                );
                self.bot
                    .send_message(&requester.chat, &messages::resource_unavailable(key))
                    .await
            }
        }
    }
}

/// Reads the whole file; the handle is closed before this returns, on success and on error.
pub async fn read_document(path: &Path) -> std::result::Result<Document, HandlerError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| HandlerError::FileUnavailable {
            path: path.display().to_string(),
            source,
        })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resource".to_string());
    Ok(Document { file_name, bytes })
}

#[async_trait]
impl EventHandler for ResourceHandler {
    async fn on_start(&self, requester: &Requester) -> Result<()> {
        self.bot
            .send_greeting(&requester.chat, &requester.user, &requester.display_name())
            .await
    }

    async fn on_help(&self, requester: &Requester) -> Result<()> {
        self.bot.send_message(&requester.chat, messages::HELP).await
    }

    #[instrument(skip(self, requester), fields(user_id = requester.user.id))]
    async fn on_list_request(&self, requester: &Requester) -> Result<()> {
        let items = self.selectable_items();
        if items.is_empty() {
            warn!(user_id = requester.user.id, "Catalog is empty");
            return self
                .bot
                .send_message(&requester.chat, messages::NO_RESOURCES)
                .await;
        }
        info!(
            user_id = requester.user.id,
            items = items.len(),
            "Sending resource list"
        );
        self.bot
            .send_choices(&requester.chat, messages::RESOURCES_HEADER, &items)
            .await
    }

    #[instrument(skip(self, requester), fields(user_id = requester.user.id))]
    async fn on_selection(&self, requester: &Requester, selected_key: &str) -> Result<()> {
        let Some(descriptor) = self.catalog.lookup(selected_key) else {
            info!(
                user_id = requester.user.id,
                key = %selected_key,
                "Selected resource not found"
            );
            return self
                .bot
                .send_message(&requester.chat, messages::RESOURCE_NOT_FOUND)
                .await;
        };

        match descriptor {
            ResourceDescriptor::Link { url } => {
                info!(user_id = requester.user.id, key = %selected_key, "Sending resource link");
                self.bot
                    .send_message(&requester.chat, &messages::link_reply(selected_key, url))
                    .await
            }
            ResourceDescriptor::File { path } => {
                let path = resolve_file_path(path, &self.resource_dir);
                self.deliver_file(requester, selected_key, &path).await
            }
        }
    }

    async fn on_text(&self, requester: &Requester, text: &str) -> Result<()> {
        if !self.echo || text.is_empty() {
            return Ok(());
        }
        self.bot.send_message(&requester.chat, text).await
    }
}
