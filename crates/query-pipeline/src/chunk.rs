//! Splits outbound text into Telegram-sized messages.

use std::fmt;

/// Telegram's per-message text limit.
pub const TELEGRAM_MAX_MESSAGE_CHARS: usize = 4096;

/// How the messaging layer should render a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    Markdown,
}

/// One outbound message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageChunk {
    text: String,
    format: TextFormat,
}

impl MessageChunk {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Markdown,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> TextFormat {
        self.format
    }

    /// Length in characters (Unicode scalar values), the unit of the chunk limit.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl AsRef<str> for MessageChunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for MessageChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Greedy left-to-right split into plain chunks of `max_chunk_size` characters; the last chunk
/// may be shorter. Concatenating the chunks gives back `text`. Empty text yields no chunks.
/// A `max_chunk_size` of 0 is treated as 1.
pub fn split_chunks(text: &str, max_chunk_size: usize) -> Vec<MessageChunk> {
    let max = max_chunk_size.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max {
            chunks.push(MessageChunk::plain(&text[start..idx]));
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(MessageChunk::plain(&text[start..]));
    }
    chunks
}
