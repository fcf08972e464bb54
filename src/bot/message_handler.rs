//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::Me;
use tracing::debug;

use crate::commands::{parse_command, BotCommand};
use crate::config::BotConfig;
use crate::dialogue::{Input, QuestionnaireDialogue, QuestionnaireState};
use crate::localization::t;
use crate::registry::UserRegistry;

use super::dialogue_manager::{advance_session, start_questionnaire};
use super::ui_builder::help_message;

async fn handle_cancel(
    bot: &Bot,
    msg: &Message,
    dialogue: &QuestionnaireDialogue,
    config: &BotConfig,
) -> Result<()> {
    match dialogue.get().await? {
        Some(QuestionnaireState::InProgress(session)) => {
            advance_session(bot, msg.chat.id, dialogue, session, Input::Cancel, config).await
        }
        _ => {
            bot.send_message(msg.chat.id, t("no-session")).await?;
            Ok(())
        }
    }
}

async fn handle_answer(
    bot: &Bot,
    msg: &Message,
    dialogue: &QuestionnaireDialogue,
    config: &BotConfig,
    text: &str,
) -> Result<()> {
    match dialogue.get().await? {
        Some(QuestionnaireState::InProgress(session)) => {
            advance_session(bot, msg.chat.id, dialogue, session, Input::Answer(text), config).await
        }
        Some(QuestionnaireState::Idle) | None => {
            bot.send_message(msg.chat.id, t("no-session")).await?;
            Ok(())
        }
    }
}

async fn handle_text_message(
    bot: &Bot,
    msg: &Message,
    dialogue: &QuestionnaireDialogue,
    config: &BotConfig,
    registry: &UserRegistry,
    me: &Me,
    text: &str,
) -> Result<()> {
    debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");

    match parse_command(text, me.username()) {
        Some(BotCommand::Start) => {
            start_questionnaire(bot, msg.chat.id, dialogue, registry, msg.from.as_ref()).await
        }
        Some(BotCommand::Cancel) => handle_cancel(bot, msg, dialogue, config).await,
        Some(BotCommand::Help) => {
            bot.send_message(msg.chat.id, help_message()).await?;
            Ok(())
        }
        Some(BotCommand::Unknown(name)) => {
            debug!(user_id = %msg.chat.id, command = %name, "Received unknown command");
            bot.send_message(msg.chat.id, t("unknown-command")).await?;
            Ok(())
        }
        Some(BotCommand::OtherBot) => {
            debug!(user_id = %msg.chat.id, "Ignoring command addressed to another bot");
            Ok(())
        }
        None => handle_answer(bot, msg, dialogue, config, text).await,
    }
}

async fn handle_unsupported_message(bot: &Bot, msg: &Message) -> Result<()> {
    debug!(user_id = %msg.chat.id, "Received unsupported message type from user");
    bot.send_message(msg.chat.id, t("unsupported-message")).await?;
    Ok(())
}

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    dialogue: QuestionnaireDialogue,
    config: Arc<BotConfig>,
    registry: Arc<UserRegistry>,
    me: Me,
) -> Result<()> {
    match msg.text() {
        Some(text) => {
            handle_text_message(&bot, &msg, &dialogue, &config, &registry, &me, text).await
        }
        None => handle_unsupported_message(&bot, &msg).await,
    }
}
