//! Long-polling runner: converts teloxide updates to core events and passes them to the EventRouter.
//! Commands, plain text, and callback queries each get a dptree branch.

use std::fmt::Display;
use std::future::IntoFuture;

use anyhow::Result;
use resbot_core::InboundEvent;
use resbot_dispatch::EventRouter;
use teloxide::{
    dispatching::UpdateFilterExt,
    dptree,
    prelude::*,
    types::{CallbackQuery, Message},
    utils::command::BotCommands,
};
use tracing::{error, info, instrument, warn};

use crate::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use crate::commands::Command;

/// Registers the command menu, then dispatches updates until Ctrl-C.
#[instrument(skip(bot, router))]
pub async fn run_dispatcher(bot: teloxide::Bot, router: EventRouter) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                info!(username = %username, "Bot identity resolved");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; continuing"),
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("Dispatcher started");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_command(router: EventRouter, msg: Message, command: Command) -> ResponseResult<()> {
    let event = TelegramMessageWrapper(&msg).to_command_event(&command);
    info!(
        user_id = event.requester().user.id,
        chat_id = event.requester().chat.id,
        command = ?command,
        "Received command"
    );
    dispatch_logged(&router, &event).await;
    Ok(())
}

async fn on_message(router: EventRouter, msg: Message) -> ResponseResult<()> {
    let wrapper = TelegramMessageWrapper(&msg);
    let Some(event) = wrapper.to_text_event() else {
        let requester = wrapper.requester();
        info!(
            user_id = requester.user.id,
            chat_id = requester.chat.id,
            "Received non-text message"
        );
        return Ok(());
    };
    if msg.text().is_some_and(|text| text.starts_with('/')) {
        info!(
            user_id = event.requester().user.id,
            chat_id = event.requester().chat.id,
            "Ignoring unknown command"
        );
        return Ok(());
    }
    info!(
        user_id = event.requester().user.id,
        chat_id = event.requester().chat.id,
        "Received message"
    );
    dispatch_logged(&router, &event).await;
    Ok(())
}

async fn on_callback(bot: Bot, router: EventRouter, q: CallbackQuery) -> ResponseResult<()> {
    let event = TelegramCallbackWrapper(&q).to_selection_event();
    match &event {
        Some(event) => info!(
            user_id = event.requester().user.id,
            chat_id = event.requester().chat.id,
            "Received selection"
        ),
        None => info!(user_id = q.from.id.0, "Received callback query without data"),
    }
    acknowledge_and_dispatch(&router, event, bot.answer_callback_query(q.id.clone())).await;
    Ok(())
}

/// Acknowledges a callback query (stops the client-side loading indicator), then dispatches
/// its selection. A failed acknowledgement, such as "query is too old" for presses queued
/// while the bot was down, is logged and the selection is still served.
async fn acknowledge_and_dispatch<A, T, E>(
    router: &EventRouter,
    event: Option<InboundEvent>,
    acknowledge: A,
) where
    A: IntoFuture<Output = std::result::Result<T, E>>,
    E: Display,
{
    if let Err(e) = acknowledge.await {
        warn!(error = %e, "Failed to answer callback query");
    }
    if let Some(event) = event {
        dispatch_logged(router, &event).await;
    }
}

/// Handler failures are logged, never returned to teloxide; one bad update must not stop polling.
async fn dispatch_logged(router: &EventRouter, event: &InboundEvent) {
    if let Err(e) = router.dispatch(event).await {
        error!(
            error = %e,
            user_id = event.requester().user.id,
            kind = %event.kind(),
            "Event dispatch failed"
        );
    }
}
