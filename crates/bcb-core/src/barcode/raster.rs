use image::{Rgb, RgbImage};

use super::{
    glyphs::{glyph, is_set, line_width_cells, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH},
    style::{parse_hex_rgb, BarcodeStyle},
};
use crate::{errors::Error, Result};

/// Draw a module sequence (1 = bar) with an optional human-readable line.
///
/// Bars and text are centered horizontally; the whole block is centered
/// vertically when the minimum size makes the canvas taller than the content.
pub fn rasterize(modules: &[u8], text: Option<&str>, style: &BarcodeStyle) -> Result<RgbImage> {
    let background = Rgb(parse_hex_rgb(style.background)?);
    let bar_color = Rgb(parse_hex_rgb(style.bar_color)?);
    let text_color = Rgb(parse_hex_rgb(style.text_color)?);

    let module = style.module_px();
    let bars_w = modules.len() as u32 * module;
    let bar_h = style.bar_height_px();
    let cell = style.text_cell_px();

    let text = text.filter(|t| !t.is_empty());
    let (text_w, text_block_h) = match text {
        Some(t) => (
            line_width_cells(t.chars().count()) * cell,
            style.text_gap_px() + GLYPH_HEIGHT * cell,
        ),
        None => (0, 0),
    };

    let content_w = bars_w.max(text_w);
    let content_h = bar_h + text_block_h;
    let pad = style.padding_px();
    let width = (content_w + 2 * pad).max(style.min_width);
    let height = (content_h + 2 * pad).max(style.min_height);

    let mut img = RgbImage::from_pixel(width, height, background);
    let top = (height - content_h) / 2;

    let bars_left = (width - bars_w) / 2;
    for (i, m) in modules.iter().enumerate() {
        if *m == 0 {
            continue;
        }
        let x = bars_left + i as u32 * module;
        fill_rect(&mut img, x, top, module, bar_h, bar_color);
    }

    if let Some(t) = text {
        let text_left = (width - text_w) / 2;
        let text_top = top + bar_h + style.text_gap_px();
        for (i, c) in t.chars().enumerate() {
            let g = glyph(c).ok_or_else(|| Error::Render(format!("no glyph for {c:?}")))?;
            let gx = text_left + i as u32 * GLYPH_ADVANCE * cell;
            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if is_set(g, col, row) {
                        fill_rect(
                            &mut img,
                            gx + col * cell,
                            text_top + row * cell,
                            cell,
                            cell,
                            text_color,
                        );
                    }
                }
            }
        }
    }

    Ok(img)
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
    for y in y0..(y0 + h).min(img.height()) {
        for x in x0..(x0 + w).min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

/// Encode as 8-bit RGB PNG with a `pHYs` chunk carrying the style's DPI.
pub fn encode_png(img: &RgbImage, style: &BarcodeStyle) -> Result<Vec<u8>> {
    let ppm = style.pixels_per_metre();
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, img.width(), img.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));

        let mut writer = encoder
            .write_header()
            .map_err(|e| Error::Render(format!("png header: {e}")))?;
        writer
            .write_image_data(img.as_raw())
            .map_err(|e| Error::Render(format!("png data: {e}")))?;
        writer
            .finish()
            .map_err(|e| Error::Render(format!("png finish: {e}")))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn lays_out_bars_and_text() {
        let style = BarcodeStyle::default();
        let img = rasterize(&[1, 0, 1], Some("7"), &style).unwrap();

        // Text (25px) is wider than the bars (15px); 2 * 50px padding around it.
        assert_eq!(img.width(), 125);
        // 213 bars + 10 gap + 35 text + padding.
        assert_eq!(img.height(), 358);

        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(55, 50), BLACK);
        assert_eq!(*img.get_pixel(60, 50), WHITE);
        assert_eq!(*img.get_pixel(65, 262), BLACK);
        assert_eq!(*img.get_pixel(55, 263), WHITE);

        // Top row of '7' is fully inked.
        assert_eq!(*img.get_pixel(50, 273), BLACK);
        assert_eq!(*img.get_pixel(74, 273), BLACK);
        assert_eq!(*img.get_pixel(75, 273), WHITE);
    }

    #[test]
    fn enforces_minimum_size() {
        let style = BarcodeStyle {
            bar_height_mm: 1,
            padding: 0,
            include_text: false,
            ..BarcodeStyle::default()
        };
        let img = rasterize(&[1], None, &style).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 100);
    }

    #[test]
    fn rejects_non_digit_text() {
        let err = rasterize(&[1], Some("x"), &BarcodeStyle::default()).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn rejects_bad_colour() {
        let style = BarcodeStyle {
            bar_color: "nope",
            ..BarcodeStyle::default()
        };
        assert!(rasterize(&[1], None, &style).is_err());
    }

    #[test]
    fn png_carries_dpi() {
        let style = BarcodeStyle::default();
        let img = rasterize(&[1, 1, 0, 1], Some("12"), &style).unwrap();
        let bytes = encode_png(&img, &style).unwrap();

        let reader = png::Decoder::new(bytes.as_slice()).read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.width, img.width());
        assert_eq!(info.height, img.height());
        let dims = info.pixel_dims.expect("pHYs chunk");
        assert_eq!(dims.xppu, 11811);
        assert_eq!(dims.yppu, 11811);
        assert!(matches!(dims.unit, png::Unit::Meter));
    }
}
