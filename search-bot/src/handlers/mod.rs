//! Handlers for the chain: message logging and the `/start` `/help` `/search` commands.

mod logging;
mod search;

pub use logging::LoggingHandler;
pub use search::{deliver_chunks, SearchCommandHandler};
