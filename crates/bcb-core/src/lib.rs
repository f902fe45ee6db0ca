//! Core domain + application logic for the barcode bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! messaging port implemented in `bcb-telegram`; barcode rasterization lives
//! behind the renderer port in [`barcode`].

pub mod artifact;
pub mod barcode;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod texts;

pub use errors::{Error, Result};
