//! 5x7 bitmap digits for the human-readable line under the bars.

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in cells (glyph + one blank column).
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

// One byte per row, low five bits, MSB is the leftmost column.
const DIGITS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

pub fn glyph(c: char) -> Option<&'static [u8; 7]> {
    c.to_digit(10).map(|d| &DIGITS[d as usize])
}

/// Whether the cell at (`col`, `row`) of `glyph` is inked.
pub fn is_set(glyph: &[u8; 7], col: u32, row: u32) -> bool {
    (glyph[row as usize] >> (GLYPH_WIDTH - 1 - col)) & 1 == 1
}

/// Width in cells of a line of `len` glyphs (no trailing gap).
pub fn line_width_cells(len: usize) -> u32 {
    if len == 0 {
        0
    } else {
        len as u32 * GLYPH_ADVANCE - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_digits_have_glyphs() {
        assert!(glyph('0').is_some());
        assert!(glyph('9').is_some());
        assert!(glyph('a').is_none());
    }

    #[test]
    fn one_is_a_centered_stem() {
        let g = glyph('1').unwrap();
        for row in 0..GLYPH_HEIGHT {
            assert!(is_set(g, 2, row));
        }
        assert!(!is_set(g, 0, 0));
    }

    #[test]
    fn line_width() {
        assert_eq!(line_width_cells(0), 0);
        assert_eq!(line_width_cells(1), 5);
        assert_eq!(line_width_cells(3), 17);
    }
}
