//! Dialogue Manager module for driving the questionnaire over Telegram

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::User;
use tracing::{debug, error, info, warn};

use crate::config::BotConfig;
use crate::dialogue::{Input, QuestionnaireDialogue, QuestionnaireState, Session, Transition};
use crate::localization::t;
use crate::measurement_types::Questionnaire;
use crate::registry::UserRegistry;
use crate::response::report_for;

use super::ui_builder::{create_consultation_keyboard, prompt_for, retry_prompt, Prompt};

/// Send a prompt, attaching its keyboard when it has one
pub async fn send_prompt(bot: &Bot, chat_id: ChatId, prompt: Prompt) -> Result<()> {
    let request = bot.send_message(chat_id, prompt.text);
    match prompt.markup {
        Some(markup) => request.reply_markup(markup).await?,
        None => request.await?,
    };
    Ok(())
}

/// Name stored in the registry: the username, or the full name without one
pub fn display_name(user: &User) -> String {
    user.username.clone().unwrap_or_else(|| user.full_name())
}

/// Register the user and open a fresh session at module selection
pub async fn start_questionnaire(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &QuestionnaireDialogue,
    registry: &UserRegistry,
    user: Option<&User>,
) -> Result<()> {
    if let Some(user) = user {
        if let Err(e) = registry.register(user.id.0, &display_name(user)).await {
            error!(user_id = %user.id, error = %e, "Failed to record user in registry");
        }
    }

    let session = Session::new();
    send_prompt(bot, chat_id, prompt_for(&session)).await?;
    dialogue
        .update(QuestionnaireState::InProgress(session))
        .await?;

    info!(user_id = %chat_id, "Questionnaire started");
    Ok(())
}

/// Feed one input to the session and act on the resulting transition
pub async fn advance_session(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &QuestionnaireDialogue,
    session: Session,
    input: Input<'_>,
    config: &BotConfig,
) -> Result<()> {
    match session.advance(input) {
        Transition::Next(session) => {
            debug!(user_id = %chat_id, step = ?session.step(), "Answer accepted");
            send_prompt(bot, chat_id, prompt_for(&session)).await?;
            dialogue
                .update(QuestionnaireState::InProgress(session))
                .await?;
        }
        Transition::Retry { session, error } => {
            warn!(user_id = %chat_id, step = ?session.step(), error = %error, "Answer rejected");
            send_prompt(bot, chat_id, retry_prompt(&session, &error)).await?;
        }
        Transition::Ignored(session) => {
            debug!(user_id = %chat_id, step = ?session.step(), "Ignoring button press for typed step");
        }
        Transition::Completed(questionnaire) => {
            dialogue.exit().await?;
            finish_questionnaire(bot, chat_id, &questionnaire, config).await?;
        }
        Transition::Cancelled => {
            dialogue.exit().await?;
            bot.send_message(chat_id, t("cancelled")).await?;
            info!(user_id = %chat_id, "Questionnaire cancelled");
        }
        Transition::Aborted(missing) => {
            dialogue.exit().await?;
            error!(user_id = %chat_id, error = %missing, "Questionnaire ended without all answers");
            bot.send_message(chat_id, t("internal-error")).await?;
        }
    }

    Ok(())
}

async fn finish_questionnaire(
    bot: &Bot,
    chat_id: ChatId,
    questionnaire: &Questionnaire,
    config: &BotConfig,
) -> Result<()> {
    match report_for(questionnaire, &config.consultation_url) {
        Ok(report) => {
            let keyboard = create_consultation_keyboard(&report.consultation_url);
            bot.send_message(chat_id, report.text)
                .reply_markup(keyboard)
                .await?;
            info!(user_id = %chat_id, module = ?questionnaire.module(), "Questionnaire completed");
        }
        Err(e) => {
            warn!(user_id = %chat_id, error = %e, "Measurements produced no valid metric");
            bot.send_message(chat_id, t("measurement-error")).await?;
        }
    }

    Ok(())
}
