use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, error_handlers::LoggingErrorHandler, prelude::*};

use bex_api::BatchApiClient;
use bex_core::{config::Config, messaging::port::MessagingPort};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub api: Arc<BatchApiClient>,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Long-polling dispatcher: one branch for callback queries (batch selection),
/// one for messages (commands).
pub async fn run_polling(cfg: Arc<Config>, api: Arc<BatchApiClient>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        tracing::info!("bex started: @{}", me.username());
    }
    tracing::info!("catalog api: {}", cfg.api_base_url);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let state = Arc::new(AppState {
        cfg,
        api,
        messenger,
    });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "unhandled error in update handler",
        ))
        .build()
        .dispatch()
        .await;

    Ok(())
}
