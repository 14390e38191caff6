//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Calls get_me() first so handlers can recognise commands addressed as `/cmd@botname`.

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL with the given teloxide Bot and HandlerChain.
/// Writes the bot's username into `bot_username` before polling; each text message is converted
/// to core::Message and passed through the chain by [`handle_message`].
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; /cmd@botname commands will not match"),
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        async move {
            handle_message(&chain, &msg).await;
            respond(())
        }
    })
    .await;

    Ok(())
}

/// Runs the chain for one update and returns once it has finished.
///
/// The repl dispatches updates from different chats concurrently but keeps one chat's updates in
/// order, so two `/search` commands in the same chat never interleave their chunks.
pub async fn handle_message(chain: &HandlerChain, msg: &teloxide::types::Message) {
    let core_msg = TelegramMessageWrapper(msg).to_core();

    if msg.text().is_none() {
        info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Received non-text message, ignored"
        );
        return;
    }

    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_id = %core_msg.id,
        "step: processing message (handler chain started)"
    );
    if let Err(e) = chain.handle(&core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
    }
}
