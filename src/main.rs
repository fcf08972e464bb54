use anyhow::Result;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;

use bodycomp_bot::bot;
use bodycomp_bot::config::BotConfig;
use bodycomp_bot::dialogue::QuestionnaireState;
use bodycomp_bot::localization::init_localization;
use bodycomp_bot::logging::init_tracing;
use bodycomp_bot::registry::UserRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = BotConfig::from_env()?;
    init_tracing(config.log_format);

    info!("Starting Body Composition Telegram Bot");

    init_localization()?;

    info!(users_file = %config.users_file.display(), "Using user registry");
    let registry = Arc::new(UserRegistry::new(config.users_file.clone()));

    let bot = Bot::new(config.token.clone());
    let config = Arc::new(config);

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .enter_dialogue::<Message, InMemStorage<QuestionnaireState>, QuestionnaireState>()
                .endpoint(bot::message_handler),
        )
        .branch(
            Update::filter_callback_query()
                .enter_dialogue::<CallbackQuery, InMemStorage<QuestionnaireState>, QuestionnaireState>()
                .endpoint(bot::callback_handler),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            InMemStorage::<QuestionnaireState>::new(),
            config,
            registry
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
