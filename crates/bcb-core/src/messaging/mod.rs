//! Messenger-agnostic inbound events and the outbound messaging port.

pub mod port;
pub mod types;
