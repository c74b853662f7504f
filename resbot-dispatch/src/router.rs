//! Dispatch table from [`EventKind`] to the [`EventHandler`] serving it.

use std::collections::HashMap;
use std::sync::Arc;

use resbot_core::{EventHandler, EventKind, HandlerError, InboundEvent, Result};
use tracing::{debug, info, instrument};

const ALL_KINDS: [EventKind; 5] = [
    EventKind::Start,
    EventKind::Help,
    EventKind::ListResources,
    EventKind::Selection,
    EventKind::Text,
];

/// Routes each inbound event to exactly one handler method. Cheap to clone; handlers are shared.
#[derive(Clone, Default)]
pub struct EventRouter {
    routes: HashMap<EventKind, Arc<dyn EventHandler>>,
}

impl EventRouter {
    /// Creates an empty router (no routes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes every event kind to `handler`.
    pub fn with_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        for kind in ALL_KINDS {
            self.routes.insert(kind, handler.clone());
        }
        self
    }

    /// Routes one event kind to `handler`, replacing any previous route for it.
    pub fn route(mut self, kind: EventKind, handler: Arc<dyn EventHandler>) -> Self {
        self.routes.insert(kind, handler);
        self
    }

    pub fn handles(&self, kind: EventKind) -> bool {
        self.routes.contains_key(&kind)
    }

    /// Calls the handler method matching the event kind. An unrouted kind is [`HandlerError::Unhandled`].
    #[instrument(skip(self, event), fields(kind = %event.kind()))]
    pub async fn dispatch(&self, event: &InboundEvent) -> Result<()> {
        let kind = event.kind();
        let requester = event.requester();
        let handler = self
            .routes
            .get(&kind)
            .ok_or_else(|| HandlerError::Unhandled(kind.to_string()))?;
        let handler_name = std::any::type_name_of_val(handler.as_ref());

        info!(
            user_id = requester.user.id,
            chat_id = requester.chat.id,
            kind = %kind,
            handler = %handler_name,
            "step: dispatch started"
        );

        match event {
            InboundEvent::Start(requester) => handler.on_start(requester).await?,
            InboundEvent::Help(requester) => handler.on_help(requester).await?,
            InboundEvent::ListResources(requester) => handler.on_list_request(requester).await?,
            InboundEvent::Selection { requester, payload } => {
                handler.on_selection(requester, payload).await?
            }
            InboundEvent::Text { requester, text } => handler.on_text(requester, text).await?,
        }

        debug!(
            user_id = requester.user.id,
            kind = %kind,
            "step: dispatch finished"
        );
        Ok(())
    }
}
