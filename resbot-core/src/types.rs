//! Core types: user, chat, requester, inbound events, outbound payloads, and the EventHandler trait.

use std::fmt;

use async_trait::async_trait;

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel, group or private) identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Who sent an inbound event and where the reply goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub user: User,
    pub chat: Chat,
}

impl Requester {
    /// Name used in greetings: first name, then `@username`, then the numeric id.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.user.first_name.as_deref().filter(|s| !s.is_empty()) {
            return name.to_string();
        }
        if let Some(username) = self.user.username.as_deref().filter(|s| !s.is_empty()) {
            return format!("@{}", username);
        }
        self.user.id.to_string()
    }
}

/// Kind of an inbound event; the router's dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    Help,
    ListResources,
    Selection,
    Text,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Start => "start",
            EventKind::Help => "help",
            EventKind::ListResources => "list_resources",
            EventKind::Selection => "selection",
            EventKind::Text => "text",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-agnostic inbound event. Produced by the Telegram adapters, consumed by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// `/start`
    Start(Requester),
    /// `/help`
    Help(Requester),
    /// `/resources`
    ListResources(Requester),
    /// A selectable item was activated; `payload` is the key it carried.
    Selection { requester: Requester, payload: String },
    /// Any other text message.
    Text { requester: Requester, text: String },
}

impl InboundEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InboundEvent::Start(_) => EventKind::Start,
            InboundEvent::Help(_) => EventKind::Help,
            InboundEvent::ListResources(_) => EventKind::ListResources,
            InboundEvent::Selection { .. } => EventKind::Selection,
            InboundEvent::Text { .. } => EventKind::Text,
        }
    }

    pub fn requester(&self) -> &Requester {
        match self {
            InboundEvent::Start(requester)
            | InboundEvent::Help(requester)
            | InboundEvent::ListResources(requester) => requester,
            InboundEvent::Selection { requester, .. } | InboundEvent::Text { requester, .. } => {
                requester
            }
        }
    }
}

/// One button of a selectable list. Activating it re-delivers `payload` as a selection event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    pub label: String,
    pub payload: String,
}

impl SelectableItem {
    /// Item whose label and payload are the same string.
    pub fn keyed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            payload: key,
        }
    }
}

/// Binary attachment sent as a file transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One method per inbound event kind. The router calls exactly one of them per event.
///
/// `on_start`, `on_help` and `on_text` default to doing nothing so a handler only serving
/// resources implements just the two required methods.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn on_start(&self, _requester: &Requester) -> crate::error::Result<()> {
        Ok(())
    }

    async fn on_help(&self, _requester: &Requester) -> crate::error::Result<()> {
        Ok(())
    }

    /// Renders the catalog as a selectable list.
    async fn on_list_request(&self, requester: &Requester) -> crate::error::Result<()>;

    /// Resolves `selected_key` and delivers the resource (or a not-found reply).
    async fn on_selection(
        &self,
        requester: &Requester,
        selected_key: &str,
    ) -> crate::error::Result<()>;

    async fn on_text(&self, _requester: &Requester, _text: &str) -> crate::error::Result<()> {
        Ok(())
    }
}
