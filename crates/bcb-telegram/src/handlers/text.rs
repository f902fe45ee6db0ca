use std::sync::Arc;

use teloxide::prelude::*;

use bcb_core::{
    dispatcher::Dispatcher,
    messaging::types::{Command, InboundEvent, Sender, TextMessage},
};

use super::commands::parse_command;

pub async fn handle_text(msg: Message, dispatcher: Arc<Dispatcher>) -> ResponseResult<()> {
    // Stickers, photos, etc. carry no text and get no reply.
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let sender = super::sender(msg.chat.id, msg.from());
    dispatcher.handle(text_event(sender, text)).await;
    Ok(())
}

pub(crate) fn text_event(sender: Sender, text: &str) -> InboundEvent {
    match parse_command(text) {
        Some((name, args)) => InboundEvent::Command(Command {
            sender,
            name,
            args,
            raw: text.to_string(),
        }),
        None => InboundEvent::Text(TextMessage {
            sender,
            text: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcb_core::domain::{ChatId, UserId};

    fn sender() -> Sender {
        Sender {
            chat_id: ChatId(1),
            user_id: UserId(2),
            display_name: None,
        }
    }

    #[test]
    fn slash_text_becomes_command() {
        match text_event(sender(), "/start@bot x") {
            InboundEvent::Command(c) => {
                assert_eq!(c.name, "start");
                assert_eq!(c.args, "x");
                assert_eq!(c.raw, "/start@bot x");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn other_text_is_kept_verbatim() {
        match text_event(sender(), " 123 ") {
            InboundEvent::Text(t) => assert_eq!(t.text, " 123 "),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
