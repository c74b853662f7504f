//! # resbot-core
//!
//! Core types and traits for the resource bot: [`Bot`], [`EventHandler`], inbound events, requester and
//! outbound payload types, errors, and tracing initialization. Transport-agnostic; used by
//! resbot-dispatch and resbot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, ResbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Document, EventHandler, EventKind, InboundEvent, Requester, SelectableItem, User,
};
