//! Wraps teloxide::Bot and implements [`resbot_core::Bot`]. Production code sends through Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use resbot_core::{Bot as CoreBot, Chat, Document, ResbotError, Result, SelectableItem, User};
use teloxide::{
    prelude::*,
    types::{
        ChatId, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, ParseMode,
        UserId,
    },
    utils::html,
};

/// Thin wrapper around teloxide::Bot that implements resbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Telegram rejects inline keyboards with more buttons than this in one row.
pub const MAX_BUTTONS_PER_ROW: usize = 8;

/// Renders items as callback buttons in catalog order, wrapping to a new row every
/// [`MAX_BUTTONS_PER_ROW`] buttons. Each button carries its payload as callback data.
pub fn inline_keyboard(items: &[SelectableItem]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = items
        .chunks(MAX_BUTTONS_PER_ROW)
        .map(|chunk| {
            chunk
                .iter()
                .map(|item| {
                    InlineKeyboardButton::callback(item.label.clone(), item.payload.clone())
                })
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// `Hi <mention>!` as Telegram HTML; `name` is escaped, the mention links to the user's profile.
pub fn greeting_html(user: &User, name: &str) -> String {
    let mention = html::user_mention(UserId(user.id as u64), &html::escape(name));
    format!("Hi {}!", mention)
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| ResbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_choices(&self, chat: &Chat, text: &str, items: &[SelectableItem]) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(inline_keyboard(items))
            .await
            .map_err(|e| ResbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: Document) -> Result<()> {
        let file = InputFile::memory(document.bytes).file_name(document.file_name);
        self.bot
            .send_document(ChatId(chat.id), file)
            .await
            .map_err(|e| ResbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_greeting(&self, chat: &Chat, user: &User, name: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), greeting_html(user, name))
            .parse_mode(ParseMode::Html)
            .reply_markup(ForceReply::new().selective())
            .await
            .map_err(|e| ResbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
