//! Adapters from Telegram (teloxide) types to resbot_core types.
//! Depends only on teloxide and resbot_core type definitions.

use resbot_core::{Chat, InboundEvent, Requester, User};

use crate::commands::Command;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }

    /// The private chat Telegram opens between the bot and this user; its id equals the user id.
    pub fn private_chat(&self) -> Chat {
        Chat {
            id: self.0.id.0 as i64,
            chat_type: "private".to_string(),
        }
    }
}

/// Wraps a teloxide Chat for conversion to core [`Chat`].
pub struct TelegramChatWrapper<'a>(pub &'a teloxide::types::Chat);

impl<'a> TelegramChatWrapper<'a> {
    pub fn to_core(&self) -> Chat {
        let chat_type = if self.0.is_private() {
            "private"
        } else if self.0.is_supergroup() {
            "supergroup"
        } else if self.0.is_group() {
            "group"
        } else if self.0.is_channel() {
            "channel"
        } else {
            "unknown"
        };
        Chat {
            id: self.0.id.0,
            chat_type: chat_type.to_string(),
        }
    }
}

/// Wraps a teloxide Message for conversion to a core [`Requester`] and [`InboundEvent`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    pub fn requester(&self) -> Requester {
        Requester {
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous_user),
            chat: TelegramChatWrapper(&self.0.chat).to_core(),
        }
    }

    /// Text message → `Text` event; non-text messages yield None.
    pub fn to_text_event(&self) -> Option<InboundEvent> {
        self.0.text().map(|text| InboundEvent::Text {
            requester: self.requester(),
            text: text.to_string(),
        })
    }

    pub fn to_command_event(&self, command: &Command) -> InboundEvent {
        command_event(command, self.requester())
    }
}

/// Maps a parsed command to its event kind.
pub fn command_event(command: &Command, requester: Requester) -> InboundEvent {
    match command {
        Command::Start => InboundEvent::Start(requester),
        Command::Help => InboundEvent::Help(requester),
        Command::Resources => InboundEvent::ListResources(requester),
    }
}

/// Builds a selection event from the parts of a callback query.
///
/// `chat` is the chat of the message carrying the button; when Telegram omits it (e.g. inline
/// messages) the reply goes to the user's private chat. A query without data yields None.
pub fn selection_event(
    from: &teloxide::types::User,
    chat: Option<Chat>,
    data: Option<&str>,
) -> Option<InboundEvent> {
    let payload = data?;
    let user = TelegramUserWrapper(from);
    Some(InboundEvent::Selection {
        requester: Requester {
            user: user.to_core(),
            chat: chat.unwrap_or_else(|| user.private_chat()),
        },
        payload: payload.to_string(),
    })
}

/// Wraps a teloxide CallbackQuery for conversion to a core selection event.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> TelegramCallbackWrapper<'a> {
    pub fn to_selection_event(&self) -> Option<InboundEvent> {
        let chat = self
            .0
            .message
            .as_ref()
            .map(|m| TelegramChatWrapper(m.chat()).to_core());
        selection_event(&self.0.from, chat, self.0.data.as_deref())
    }
}

fn anonymous_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}
