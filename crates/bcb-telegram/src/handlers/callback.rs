use std::sync::Arc;

use teloxide::prelude::*;

use bcb_core::{
    dispatcher::Dispatcher,
    messaging::types::{CallbackAction, InboundEvent, Sender},
};

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dispatcher: Arc<Dispatcher>,
) -> ResponseResult<()> {
    let chat_id = q.message.as_ref().map(|m| m.chat.id);
    let sender = chat_id.map(|id| super::sender(id, Some(&q.from)));

    match callback_event(sender, &q.id, q.data.as_deref()) {
        Some(event) => dispatcher.handle(event).await,
        None => {
            // Nothing to dispatch (inline-mode message or empty data); still
            // clear the button spinner.
            tracing::debug!(callback_id = %q.id, "callback without chat or data");
            let _ = bot.answer_callback_query(q.id.clone()).await;
        }
    }

    Ok(())
}

pub(crate) fn callback_event(
    sender: Option<Sender>,
    callback_id: &str,
    data: Option<&str>,
) -> Option<InboundEvent> {
    let sender = sender?;
    let data = data.filter(|d| !d.is_empty())?;
    Some(InboundEvent::Callback(CallbackAction {
        sender,
        callback_id: callback_id.to_string(),
        data: data.to_string(),
    }))
}
