//! Bot command parsing: `/start`, `/help`, `/search <free text>`.

/// A recognised bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// Arguments joined with single spaces; empty when the user sent no topic.
    Search(String),
}

/// Parses `text` as a bot command.
///
/// The command name is case-insensitive and may be addressed as `/cmd@botname`; commands
/// addressed to another bot (when `bot_username` is known) and unknown commands return None.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<Command> {
    let mut tokens = text.split_whitespace();
    let head = tokens.next()?.strip_prefix('/')?;

    let (name, addressee) = match head.split_once('@') {
        Some((name, addressee)) => (name, Some(addressee)),
        None => (head, None),
    };
    if let (Some(addressee), Some(username)) = (addressee, bot_username) {
        if !addressee.eq_ignore_ascii_case(username) {
            return None;
        }
    }

    match name.to_ascii_lowercase().as_str() {
        "start" => Some(Command::Start),
        "help" => Some(Command::Help),
        "search" => Some(Command::Search(tokens.collect::<Vec<_>>().join(" "))),
        _ => None,
    }
}
