//! # Commands Module
//!
//! Recognizes slash commands, with or without a `@botname` suffix. In group
//! chats a suffix naming another bot means the command is not ours.

use lazy_static::lazy_static;
use regex::Regex;

const COMMAND_PATTERN: &str = r"^/([A-Za-z0-9_]+)(?:@([A-Za-z0-9_]+))?(?:\s|$)";

lazy_static! {
    static ref COMMAND_REGEX: Regex =
        Regex::new(COMMAND_PATTERN).expect("Command pattern should be valid");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Cancel,
    Help,
    Unknown(String),
    /// Command addressed to a different bot
    OtherBot,
}

/// Parse a message as a command for the bot named `bot_username`; `None`
/// for ordinary text
pub fn parse_command(text: &str, bot_username: &str) -> Option<BotCommand> {
    let captures = COMMAND_REGEX.captures(text.trim())?;
    let name = captures.get(1)?.as_str().to_lowercase();

    if let Some(mention) = captures.get(2) {
        if !mention.as_str().eq_ignore_ascii_case(bot_username) {
            return Some(BotCommand::OtherBot);
        }
    }

    Some(match name.as_str() {
        "start" => BotCommand::Start,
        "cancel" => BotCommand::Cancel,
        "help" => BotCommand::Help,
        _ => BotCommand::Unknown(name),
    })
}
