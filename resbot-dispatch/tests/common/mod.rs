//! Shared test helpers: a recording [`Bot`] and requester/catalog builders.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use resbot_catalog::{Catalog, ResourceDescriptor, ResourceKey};
use resbot_core::{Bot, Chat, Document, Requester, Result, SelectableItem, User};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Choices { chat_id: i64, text: String, items: Vec<SelectableItem> },
    Document { chat_id: i64, document: Document },
    Greeting { chat_id: i64, user_id: i64, name: String },
}

/// Mock Bot that records every outbound call in order instead of hitting Telegram.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_choices(&self, chat: &Chat, text: &str, items: &[SelectableItem]) -> Result<()> {
        self.record(Sent::Choices {
            chat_id: chat.id,
            text: text.to_string(),
            items: items.to_vec(),
        });
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: Document) -> Result<()> {
        self.record(Sent::Document {
            chat_id: chat.id,
            document,
        });
        Ok(())
    }

    async fn send_greeting(&self, chat: &Chat, user: &User, name: &str) -> Result<()> {
        self.record(Sent::Greeting {
            chat_id: chat.id,
            user_id: user.id,
            name: name.to_string(),
        });
        Ok(())
    }
}

pub fn requester() -> Requester {
    Requester {
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
    }
}

pub fn catalog(pairs: &[(&str, ResourceDescriptor)]) -> Arc<Catalog> {
    let pairs = pairs
        .iter()
        .map(|(key, descriptor)| (ResourceKey::parse(*key).unwrap(), descriptor.clone()));
    Arc::new(Catalog::from_pairs(pairs).unwrap())
}
