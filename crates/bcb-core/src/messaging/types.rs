use std::{borrow::Cow, path::PathBuf};

use crate::domain::{ChatId, UserId};

/// Who sent an update and where to reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    pub chat_id: ChatId,
    pub user_id: UserId,
    /// First name as shown by the client.
    pub display_name: Option<String>,
}

/// Messenger-agnostic incoming update.
///
/// Telegram-specific fields stay in the Telegram adapter.
#[derive(Clone, Debug)]
pub enum InboundEvent {
    Command(Command),
    Callback(CallbackAction),
    Text(TextMessage),
}

impl InboundEvent {
    pub fn sender(&self) -> &Sender {
        match self {
            InboundEvent::Command(c) => &c.sender,
            InboundEvent::Callback(c) => &c.sender,
            InboundEvent::Text(t) => &t.sender,
        }
    }

    /// Short label for the update log line.
    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Command(_) => "command",
            InboundEvent::Callback(_) => "callback",
            InboundEvent::Text(_) => "text",
        }
    }

    /// Text or callback payload, for logging only.
    pub fn payload(&self) -> Cow<'_, str> {
        match self {
            InboundEvent::Command(c) => Cow::Borrowed(&c.raw),
            InboundEvent::Callback(c) => Cow::Borrowed(&c.data),
            InboundEvent::Text(t) => Cow::Borrowed(&t.text),
        }
    }
}

/// A slash command, e.g. `/start` or `/start@some_bot payload`.
#[derive(Clone, Debug)]
pub struct Command {
    pub sender: Sender,
    /// Lowercased name without the leading slash and `@botname` suffix.
    pub name: String,
    pub args: String,
    /// The message text exactly as received.
    pub raw: String,
}

impl Command {
    /// Treat an unregistered command as ordinary text.
    pub fn into_text(self) -> TextMessage {
        TextMessage {
            sender: self.sender,
            text: self.raw,
        }
    }
}

/// Inline keyboard button press.
#[derive(Clone, Debug)]
pub struct CallbackAction {
    pub sender: Sender,
    pub callback_id: String,
    pub data: String,
}

#[derive(Clone, Debug)]
pub struct TextMessage {
    pub sender: Sender,
    pub text: String,
}

/// Inline keyboard (buttons), laid out one button per row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub buttons: Vec<InlineButton>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn callback(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

impl InlineKeyboard {
    pub fn new(buttons: Vec<InlineButton>) -> Self {
        Self { buttons }
    }
}

/// Image payload for a photo reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoSource {
    /// Uploaded straight from memory.
    Bytes { file_name: String, data: Vec<u8> },
    /// Uploaded from a file that the caller keeps alive until the send returns.
    Path(PathBuf),
}
