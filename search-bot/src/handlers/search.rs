//! Command handler: routes `/start`, `/help` and `/search` to the [`QueryPipeline`] and delivers
//! the resulting chunks through the [`Bot`] trait, one message per chunk, in order.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Chat, Handler, HandlerError, HandlerResponse, Message, Result};
use query_pipeline::{MessageChunk, PipelineError, QueryPipeline, TextFormat};
use tracing::{error, info, instrument};

use crate::command::{parse_command, Command};

/// Handles the bot's three commands and returns `Reply(text)` with everything delivered, so
/// later handlers see the response in `after()`. Any other message passes through (`Continue`).
#[derive(Clone)]
pub struct SearchCommandHandler {
    pipeline: Arc<QueryPipeline>,
    bot: Arc<dyn Bot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
}

impl SearchCommandHandler {
    pub fn new(
        pipeline: Arc<QueryPipeline>,
        bot: Arc<dyn Bot>,
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    ) -> Self {
        Self {
            pipeline,
            bot,
            bot_username,
        }
    }

    async fn get_bot_username(&self) -> Option<String> {
        self.bot_username.read().await.clone()
    }

    /// Outbound chunks for a command. Every branch yields at least one chunk.
    async fn respond_to(&self, command: &Command) -> Vec<MessageChunk> {
        match command {
            Command::Start => match self.pipeline.greeting().await {
                Ok(greeting) => vec![MessageChunk::plain(greeting)],
                Err(e) => {
                    error!(error = %e, "Greeting translation failed");
                    vec![MessageChunk::plain(PipelineError::from(e).user_message())]
                }
            },
            Command::Help => vec![MessageChunk::plain(self.pipeline.help())],
            Command::Search(query) => self.pipeline.answer(query).await,
        }
    }
}

#[async_trait]
impl Handler for SearchCommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let bot_username = self.get_bot_username().await;
        let Some(command) = parse_command(&message.content, bot_username.as_deref()) else {
            return Ok(HandlerResponse::Continue);
        };
        info!(command = ?command, user_id = message.user.id, "step: command received");

        let chunks = self.respond_to(&command).await;
        deliver_chunks(self.bot.as_ref(), &message.chat, &chunks).await?;

        let delivered: Vec<&str> = chunks.iter().map(MessageChunk::as_str).collect();
        Ok(HandlerResponse::Reply(delivered.concat()))
    }
}

/// Sends `chunks` to `chat` one by one, in order; Markdown chunks use the Markdown send.
/// Stops at the first failed send and reports how many chunks went out before it.
pub async fn deliver_chunks(bot: &dyn Bot, chat: &Chat, chunks: &[MessageChunk]) -> Result<()> {
    let total = chunks.len();
    for (sent, chunk) in chunks.iter().enumerate() {
        let outcome = match chunk.format() {
            TextFormat::Markdown => bot.send_markdown(chat, chunk.as_str()).await,
            TextFormat::Plain => bot.send_message(chat, chunk.as_str()).await,
        };
        if let Err(e) = outcome {
            error!(error = %e, chat_id = chat.id, sent, total, "Failed to deliver chunk");
            return Err(HandlerError::Delivery {
                sent,
                total,
                reason: e.to_string(),
            }
            .into());
        }
    }
    info!(chat_id = chat.id, chunks = total, "step: response delivered");
    Ok(())
}
