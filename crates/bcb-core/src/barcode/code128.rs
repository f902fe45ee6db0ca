use async_trait::async_trait;
use barcoders::sym::code128::Code128;

use super::{raster, BarcodeRenderer, BarcodeRequest, BarcodeStyle};
use crate::{errors::Error, Result};

/// Longest input we render; scanners and chat previews give up well before Telegram's
/// 4096-character message limit.
pub const MAX_DIGITS: usize = 80;

/// Code128 start / switch character for set B (single characters).
const SET_B: char = 'Ɓ';
/// Code128 start / switch character for set C (digit pairs).
const SET_C: char = 'Ć';

/// Digits go in set C two at a time; an odd trailing digit switches to set B.
fn code128_payload(digits: &str) -> String {
    let even = digits.len() - digits.len() % 2;
    let (pairs, tail) = digits.split_at(even);

    let mut out = String::with_capacity(digits.len() + 4);
    if !pairs.is_empty() {
        out.push(SET_C);
        out.push_str(pairs);
    }
    if !tail.is_empty() {
        out.push(SET_B);
        out.push_str(tail);
    }
    out
}

/// Encode `digits` into Code128 modules (1 = bar, 0 = space).
fn encode_modules(digits: &str) -> Result<Vec<u8>> {
    let symbol = Code128::new(code128_payload(digits))
        .map_err(|e| Error::Render(format!("code128 rejected {digits:?}: {e:?}")))?;
    Ok(symbol.encode())
}

/// Production renderer: Code128, human-readable digits, PNG output.
#[derive(Clone, Debug, Default)]
pub struct Code128Renderer {
    style: BarcodeStyle,
}

impl Code128Renderer {
    pub fn new(style: BarcodeStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &BarcodeStyle {
        &self.style
    }

    /// Blocking render. Handlers go through [`BarcodeRenderer::render`].
    pub fn render_png(&self, digits: &str) -> Result<Vec<u8>> {
        if digits.len() > MAX_DIGITS {
            return Err(Error::Render(format!(
                "{} digits exceed the {MAX_DIGITS}-digit limit",
                digits.len()
            )));
        }
        let modules = encode_modules(digits)?;
        let text = self.style.include_text.then_some(digits);
        let img = raster::rasterize(&modules, text, &self.style)?;
        raster::encode_png(&img, &self.style)
    }
}

#[async_trait]
impl BarcodeRenderer for Code128Renderer {
    async fn render(&self, req: &BarcodeRequest) -> Result<Vec<u8>> {
        let renderer = self.clone();
        let digits = req.as_str().to_string();
        tokio::task::spawn_blocking(move || renderer.render_png(&digits))
            .await
            .map_err(|e| Error::Render(format!("render task failed: {e}")))?
    }
}
