//! Maps every inbound event to its reply.
//!
//! The dispatcher holds no mutable state: configuration and both ports are
//! shared read-only, so concurrent updates never coordinate.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    artifact::BarcodeArtifact,
    barcode::{BarcodeRenderer, BarcodeRequest},
    config::Config,
    domain::ChatId,
    messaging::{
        port::MessagingPort,
        types::{CallbackAction, Command, InboundEvent, InlineButton, InlineKeyboard, TextMessage},
    },
    texts, Result,
};

pub const START_COMMAND: &str = "start";

/// Inline keyboard actions offered by the greeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    GenerateBarcode,
    Help,
}

impl Action {
    pub const fn id(self) -> &'static str {
        match self {
            Action::GenerateBarcode => "GEN_BARCODE",
            Action::Help => "help",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "GEN_BARCODE" => Some(Action::GenerateBarcode),
            "help" => Some(Action::Help),
            _ => None,
        }
    }
}

pub struct Dispatcher {
    cfg: Arc<Config>,
    messenger: Arc<dyn MessagingPort>,
    renderer: Arc<dyn BarcodeRenderer>,
}

impl Dispatcher {
    pub fn new(
        cfg: Arc<Config>,
        messenger: Arc<dyn MessagingPort>,
        renderer: Arc<dyn BarcodeRenderer>,
    ) -> Self {
        Self {
            cfg,
            messenger,
            renderer,
        }
    }

    /// Handle one update to completion. Never fails: problems are logged and,
    /// where a user is waiting, answered with a generic message.
    pub async fn handle(&self, event: InboundEvent) {
        let sender = event.sender();
        info!(
            chat_id = sender.chat_id.0,
            user = sender.display_name.as_deref().unwrap_or("unknown user"),
            kind = event.kind(),
            payload = %event.payload(),
            "update received"
        );

        match event {
            InboundEvent::Command(cmd) if cmd.name == START_COMMAND => {
                self.on_command_start(&cmd).await
            }
            // Only /start is registered; other commands are just text.
            InboundEvent::Command(cmd) => self.on_text(&cmd.into_text()).await,
            InboundEvent::Callback(action) => self.on_action(&action).await,
            InboundEvent::Text(msg) => self.on_text(&msg).await,
        }
    }

    async fn on_command_start(&self, cmd: &Command) {
        let keyboard = InlineKeyboard::new(vec![
            InlineButton::callback(texts::BUTTON_GENERATE, Action::GenerateBarcode.id()),
            InlineButton::callback(texts::BUTTON_HELP, Action::Help.id()),
        ]);

        if let Err(e) = self
            .messenger
            .send_inline_keyboard(cmd.sender.chat_id, texts::GREETING, keyboard)
            .await
        {
            error!(chat_id = cmd.sender.chat_id.0, error = %e, "failed to send greeting");
        }
    }

    async fn on_action(&self, cb: &CallbackAction) {
        let chat_id = cb.sender.chat_id;
        let Some(action) = Action::from_id(&cb.data) else {
            warn!(chat_id = chat_id.0, data = %cb.data, "unhandled callback action, ignoring");
            return;
        };

        // Clears the client's loading indicator on the button.
        if let Err(e) = self
            .messenger
            .answer_callback_query(&cb.callback_id, None)
            .await
        {
            warn!(chat_id = chat_id.0, error = %e, "failed to answer callback query");
        }

        let text = match action {
            Action::GenerateBarcode => texts::ENTER_NUMBER,
            Action::Help => texts::HELP,
        };
        self.reply(chat_id, text).await;
    }

    async fn on_text(&self, msg: &TextMessage) {
        let chat_id = msg.sender.chat_id;
        let Some(req) = BarcodeRequest::parse(&msg.text) else {
            self.reply(chat_id, &texts::not_a_number(&msg.text)).await;
            return;
        };

        self.reply(chat_id, texts::GENERATING).await;

        if let Err(e) = self.send_barcode(chat_id, &req).await {
            error!(chat_id = chat_id.0, digits = %req, error = %e, "barcode generation failed");
            self.reply(chat_id, texts::GENERATION_FAILED).await;
        }
    }

    async fn send_barcode(&self, chat_id: ChatId, req: &BarcodeRequest) -> Result<()> {
        let png = self.renderer.render(req).await?;
        let artifact = BarcodeArtifact::new(req, png, &self.cfg.artifact_mode)?;

        self.messenger
            .send_photo(chat_id, artifact.photo(), &texts::caption(req.as_str()))
            .await?;

        // The photo is already delivered; a failed cleanup is only worth a log line.
        let file_name = artifact.file_name().to_string();
        if let Err(e) = artifact.close() {
            warn!(chat_id = chat_id.0, file = %file_name, error = %e, "failed to remove barcode file");
        }

        info!(chat_id = chat_id.0, digits = %req, "barcode sent");
        Ok(())
    }

    async fn reply(&self, chat_id: ChatId, text: &str) {
        if let Err(e) = self.messenger.send_text(chat_id, text).await {
            error!(chat_id = chat_id.0, error = %e, "failed to send reply");
        }
    }
}
