use std::sync::Arc;

use anyhow::Context;
use teloxide::{
    dispatching::{Dispatcher as UpdateDispatcher, ShutdownToken},
    dptree,
    prelude::*,
    types::Me,
};
use tracing::{info, warn};

use bcb_core::{
    barcode::BarcodeRenderer, config::Config, dispatcher::Dispatcher,
    messaging::port::MessagingPort,
};

use crate::handlers;
use crate::TelegramMessenger;

/// Connect, verify the token, then long-poll until SIGINT/SIGTERM.
///
/// Fails (without ever polling) when the identity lookup fails.
pub async fn run_polling(
    cfg: Arc<Config>,
    renderer: Arc<dyn BarcodeRenderer>,
) -> anyhow::Result<()> {
    info!("starting barcode bot");
    info!(token = %cfg.token_preview(), "using bot token");

    let bot = build_bot(&cfg)?;
    let me = check_connectivity(&bot).await?;
    info!(
        name = %me.user.first_name,
        username = %format!("@{}", me.username()),
        "connected to Telegram Bot API"
    );

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let dispatcher = Arc::new(Dispatcher::new(cfg, messenger, renderer));

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    let mut updates = UpdateDispatcher::builder(bot, handler)
        .dependencies(dptree::deps![dispatcher])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "an error from an update handler",
        ))
        .enable_ctrlc_handler()
        .build();

    spawn_sigterm_listener(updates.shutdown_token());

    info!("bot is running; send it any number to get a barcode, press Ctrl+C to stop");
    updates.dispatch().await;
    info!("bot stopped");

    Ok(())
}

fn build_bot(cfg: &Config) -> anyhow::Result<Bot> {
    let bot = Bot::new(cfg.bot_token.clone());
    let Some(url) = cfg.api_url.as_deref() else {
        return Ok(bot);
    };
    let url = reqwest::Url::parse(url).with_context(|| format!("invalid BOT_API_URL: {url}"))?;
    Ok(bot.set_api_url(url))
}

async fn check_connectivity(bot: &Bot) -> anyhow::Result<Me> {
    bot.get_me()
        .await
        .context("connectivity check (getMe) failed")
}

#[cfg(unix)]
fn spawn_sigterm_listener(token: ShutdownToken) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut term = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                return;
            }
        };
        if term.recv().await.is_none() {
            return;
        }

        info!("received SIGTERM, shutting down");
        match token.shutdown() {
            Ok(done) => done.await,
            Err(_) => warn!("dispatcher was not running at SIGTERM"),
        }
    });
}

#[cfg(not(unix))]
fn spawn_sigterm_listener(_token: ShutdownToken) {}
