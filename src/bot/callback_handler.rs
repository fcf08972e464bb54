//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error};

use crate::config::BotConfig;
use crate::dialogue::{Input, QuestionnaireDialogue, QuestionnaireState};

use super::dialogue_manager::advance_session;

/// Handle callback queries from the module and activity keyboards
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    dialogue: QuestionnaireDialogue,
    config: Arc<BotConfig>,
) -> Result<()> {
    debug!(user_id = %q.from.id, "Received callback query from user");

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id.clone()).await?;

    let data = q.data.as_deref().unwrap_or("");

    match dialogue.get().await? {
        Some(QuestionnaireState::InProgress(session)) if session.step().expects_selection() => {
            if let Some(msg) = &q.message {
                // The keyboard has served its purpose
                if let Err(e) = bot.edit_message_reply_markup(msg.chat().id, msg.id()).await {
                    error!(user_id = %q.from.id, error = %e, "Failed to remove inline keyboard");
                }
            }

            advance_session(
                &bot,
                dialogue.chat_id(),
                &dialogue,
                session,
                Input::Selection(data),
                &config,
            )
            .await?;
        }
        dialogue_state => {
            debug!(user_id = %q.from.id, dialogue_state = ?dialogue_state, "Ignoring callback for current state");
        }
    }

    Ok(())
}
