//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute
//! recording fakes.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a message rendered with Markdown parse mode. Transports without markup support fall back to plain text.
    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_message(chat, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Message, User};
    use std::sync::Mutex;

    struct RecordingBot {
        sent: Mutex<Vec<(i64, String)>>,
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
            self.sent.lock().unwrap().push((chat.id, text.to_string()));
            Ok(())
        }
    }

    fn message() -> Message {
        Message::text(
            "1",
            User {
                id: 7,
                username: None,
                first_name: None,
                last_name: None,
            },
            Chat {
                id: 42,
                chat_type: "private".to_string(),
            },
            "/help",
        )
    }

    #[tokio::test]
    async fn test_send_markdown_defaults_to_plain_send() {
        let bot = RecordingBot {
            sent: Mutex::new(Vec::new()),
        };
        let chat = message().chat;
        bot.send_markdown(&chat, "`code`").await.unwrap();
        assert_eq!(*bot.sent.lock().unwrap(), vec![(42, "`code`".to_string())]);
    }
}
