//! # resbot-telegram
//!
//! Telegram layer: adapters from teloxide updates to core events, the [`resbot_core::Bot`]
//! implementation, command definitions, minimal config, and the dispatcher runner.
//! Handles only Telegram connectivity; catalog and reply logic live in resbot-dispatch.

mod adapters;
mod bot_adapter;
mod commands;
mod config;
mod runner;

pub use adapters::{
    command_event, selection_event, TelegramCallbackWrapper, TelegramChatWrapper,
    TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::{greeting_html, inline_keyboard, TelegramBotAdapter, MAX_BUTTONS_PER_ROW};
pub use commands::Command;
pub use config::TelegramConfig;
pub use runner::run_dispatcher;
