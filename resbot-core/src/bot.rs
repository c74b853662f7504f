//! Bot abstraction: the reply collaborator handlers emit responses through.
//!
//! [`Bot`] is transport-agnostic; `resbot_telegram::TelegramBotAdapter` implements it via teloxide.

use crate::error::Result;
use crate::types::{Chat, Document, SelectableItem, User};
use async_trait::async_trait;

/// Outbound operations. Implementations map to a transport (e.g. Telegram); tests record calls instead.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends `text` with one selectable button per item.
    async fn send_choices(&self, chat: &Chat, text: &str, items: &[SelectableItem]) -> Result<()>;
    /// Uploads `document` as a file attachment.
    async fn send_document(&self, chat: &Chat, document: Document) -> Result<()>;
    /// Greets `user` in `chat` with a mention labeled `name` and prompts them to reply.
    async fn send_greeting(&self, chat: &Chat, user: &User, name: &str) -> Result<()>;
}
