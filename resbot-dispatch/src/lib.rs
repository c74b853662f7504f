//! # resbot-dispatch
//!
//! Request dispatching. [`EventRouter`] maps each inbound event kind to an [`resbot_core::EventHandler`]
//! method; [`ResourceHandler`] is the handler that renders the catalog as buttons and resolves a
//! selected key to a link reply or a file upload.

pub mod messages;
mod resource_handler;
mod router;

pub use resource_handler::{read_document, ResourceHandler};
pub use router::EventRouter;

// Integration tests live in tests/
