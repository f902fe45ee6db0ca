use crate::{errors::Error, Result};

/// Fixed rendering parameters.
///
/// Units follow common barcode tooling: `scale` is pixels per module, lengths
/// given in points are multiplied by `scale`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarcodeStyle {
    pub scale: u32,
    pub bar_height_mm: u32,
    pub include_text: bool,
    /// Human-readable text size in points.
    pub text_size: u32,
    /// Quiet area around the symbol, in points.
    pub padding: u32,
    pub background: &'static str,
    pub bar_color: &'static str,
    pub text_color: &'static str,
    pub min_width: u32,
    pub min_height: u32,
    pub dpi: u32,
}

impl Default for BarcodeStyle {
    fn default() -> Self {
        Self {
            scale: 5,
            bar_height_mm: 15,
            include_text: true,
            text_size: 12,
            padding: 10,
            background: "FFFFFF",
            bar_color: "000000",
            text_color: "000000",
            min_width: 100,
            min_height: 100,
            dpi: 300,
        }
    }
}

impl BarcodeStyle {
    pub fn module_px(&self) -> u32 {
        self.scale.max(1)
    }

    /// Bar height in pixels: millimetres -> points (72/in) -> scaled pixels.
    pub fn bar_height_px(&self) -> u32 {
        let points = self.bar_height_mm as f64 * 72.0 / 25.4;
        (points * self.module_px() as f64).round().max(1.0) as u32
    }

    pub fn padding_px(&self) -> u32 {
        self.padding * self.module_px()
    }

    /// Side of one glyph cell; 12pt text maps to one cell per scale unit.
    pub fn text_cell_px(&self) -> u32 {
        (self.text_size * self.module_px() / 12).max(1)
    }

    pub fn text_gap_px(&self) -> u32 {
        2 * self.module_px()
    }

    /// Resolution as pixels per metre (PNG `pHYs` unit).
    pub fn pixels_per_metre(&self) -> u32 {
        (self.dpi as f64 / 0.0254).round() as u32
    }
}

/// Parse an `RRGGBB` hex triple.
pub fn parse_hex_rgb(hex: &str) -> Result<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(Error::Render(format!("invalid colour: {hex:?}")));
    }
    let mut out = [0u8; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| Error::Render(format!("invalid colour: {hex:?}")))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        let s = BarcodeStyle::default();
        assert_eq!(s.module_px(), 5);
        assert_eq!(s.bar_height_px(), 213);
        assert_eq!(s.padding_px(), 50);
        assert_eq!(s.text_cell_px(), 5);
        assert_eq!(s.pixels_per_metre(), 11811);
    }

    #[test]
    fn parses_hex_colours() {
        assert_eq!(parse_hex_rgb("FFFFFF").unwrap(), [255, 255, 255]);
        assert_eq!(parse_hex_rgb("#1a2B3c").unwrap(), [0x1a, 0x2b, 0x3c]);
        assert!(parse_hex_rgb("FFF").is_err());
        assert!(parse_hex_rgb("GG0000").is_err());
        assert!(parse_hex_rgb("ééé").is_err());
    }
}
