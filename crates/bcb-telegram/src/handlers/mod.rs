//! Telegram update handlers.
//!
//! Each handler is a small adapter that translates a teloxide update into a
//! core `InboundEvent` and hands it to the dispatcher. Replies go out through
//! the messaging port; the only direct Bot API call here acknowledges callbacks
//! that cannot be dispatched.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message, User},
};

use bcb_core::{
    dispatcher::Dispatcher,
    domain::{ChatId, UserId},
    messaging::types::Sender,
};

mod callback;
mod commands;
mod text;

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dispatcher: Arc<Dispatcher>,
) -> ResponseResult<()> {
    callback::handle_callback(bot, q, dispatcher).await
}

pub async fn handle_message(msg: Message, dispatcher: Arc<Dispatcher>) -> ResponseResult<()> {
    text::handle_text(msg, dispatcher).await
}

fn sender(chat_id: teloxide::types::ChatId, user: Option<&User>) -> Sender {
    Sender {
        chat_id: ChatId(chat_id.0),
        user_id: UserId(user.map(|u| u.id.0 as i64).unwrap_or_default()),
        display_name: user.map(|u| u.first_name.clone()),
    }
}
