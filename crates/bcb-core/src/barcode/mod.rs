//! Barcode requests and the renderer port.
//!
//! The production renderer encodes Code128 with `barcoders` and rasterizes the
//! modules (plus the human-readable digits) itself, so the output is a plain
//! PNG byte buffer ready for upload.

use std::{fmt, sync::OnceLock};

use async_trait::async_trait;
use regex::Regex;

use crate::Result;

mod code128;
mod glyphs;
mod raster;
pub mod style;

pub use code128::{Code128Renderer, MAX_DIGITS};
pub use style::BarcodeStyle;

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII only: `\d` would also accept other Unicode decimal digits.
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid regex"))
}

/// A validated, trimmed, non-empty string of ASCII decimal digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BarcodeRequest(String);

impl BarcodeRequest {
    /// Trim `text` and accept it when it is a non-empty run of digits.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if digits_re().is_match(trimmed) {
            Some(Self(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BarcodeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port for turning a digit string into an image.
#[async_trait]
pub trait BarcodeRenderer: Send + Sync {
    /// Render `req` and return encoded image bytes (PNG).
    async fn render(&self, req: &BarcodeRequest) -> Result<Vec<u8>>;
}
