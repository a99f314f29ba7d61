//! Glyph rendering and simple text placement
//!
//! Text is drawn one glyph at a time from a [`Font`], left to right on a single
//! line. A scale factor above 1 draws every glyph pixel as a `scale x scale` block.
//!
//! [`print_at`](Framebuffer::print_at) and [`draw_cursor`](Framebuffer::draw_cursor)
//! address the screen as a grid of [`CELL_WIDTH`] x [`CELL_HEIGHT`] cells (scaled),
//! which suits fixed-width 5x7 style fonts.

use core::fmt::{self, Write};

use crate::font::Font;
use crate::framebuffer::Framebuffer;

/// Cell width in pixels at scale 1
pub const CELL_WIDTH: u32 = 6;

/// Cell height in pixels at scale 1, used by [`Framebuffer::draw_cursor`]
pub const CELL_HEIGHT: u32 = 8;

/// Size of the formatting buffer used by [`Framebuffer::print_at`]
///
/// One byte is reserved as a terminator slot, so at most `PRINT_BUFFER_SIZE - 1`
/// bytes of text are drawn. Longer output is truncated.
pub const PRINT_BUFFER_SIZE: usize = 128;

const PRINT_CAPACITY: usize = PRINT_BUFFER_SIZE - 1;

/// Text cursor style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorKind {
    /// Draw nothing
    #[default]
    None,
    /// Line along the bottom row of the cell
    Underscore,
    /// Inverted cell, grown by one pixel up and left
    Block,
}

/// Size of rendered text in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextSize {
    /// Total horizontal advance
    pub width: u32,
    /// Line height
    pub height: u32,
}

/// Measure `s` at scale 1
///
/// The width is the sum of each character's `x_advance`; characters the font does
/// not cover add nothing. The height is always the font's line height, even for
/// an empty string.
pub fn measure_string(font: &Font<'_>, s: &str) -> TextSize {
    let width = s
        .chars()
        .filter_map(|c| font.glyph(c))
        .map(|glyph| u32::from(glyph.x_advance))
        .sum();
    TextSize {
        width,
        height: u32::from(font.y_advance),
    }
}

impl Framebuffer {
    /// Draw one character with its origin at (x, y)
    ///
    /// Returns the glyph's unscaled `x_advance`, or 0 (drawing nothing) if the font
    /// does not cover `c`.
    pub fn draw_char(&mut self, x: i32, y: i32, scale: u32, font: &Font<'_>, c: char) -> u8 {
        let Some(glyph) = font.glyph(c) else {
            return 0;
        };
        let factor = to_i32(scale);
        let x_offset = i32::from(glyph.x_offset);
        let y_offset = i32::from(glyph.y_offset);

        for row in 0..glyph.height {
            for column in 0..glyph.width {
                if !font.is_set(glyph, column, row) {
                    continue;
                }
                let dx = i32::from(column) + x_offset;
                let dy = i32::from(row) + y_offset;
                if scale == 1 {
                    self.plot(x.saturating_add(dx), y.saturating_add(dy));
                } else {
                    self.draw_filled_rect(
                        x.saturating_add(dx.saturating_mul(factor)),
                        y.saturating_add(dy.saturating_mul(factor)),
                        scale,
                        scale,
                    );
                }
            }
        }

        glyph.x_advance
    }

    /// Draw a string on one line starting at (x, y)
    ///
    /// The cursor advances by each glyph's `x_advance * scale`.
    pub fn draw_string(&mut self, x: i32, y: i32, scale: u32, font: &Font<'_>, s: &str) {
        let factor = to_i32(scale);
        let mut cursor = x;
        for c in s.chars() {
            let advance = self.draw_char(cursor, y, scale, font, c);
            cursor = cursor.saturating_add(i32::from(advance).saturating_mul(factor));
        }
    }

    /// Format text and draw it at a cell position
    ///
    /// The pixel origin is `(x_cell * 6 * scale, y_cell * y_advance * scale)`.
    /// Output beyond `PRINT_BUFFER_SIZE - 1` bytes is dropped.
    ///
    /// ```
    /// use ssd1309::font::{Font, Glyph};
    /// use ssd1309::{Dimensions, Framebuffer};
    ///
    /// static BITMAP: [u8; 1] = [0x80];
    /// static GLYPHS: [Glyph; 10] = [Glyph::new(0, 1, 1, 6, 0, 0); 10];
    /// static DIGITS: Font<'static> = Font::new(&BITMAP, &GLYPHS, b'0' as u16, b'9' as u16, 8);
    ///
    /// let dims = match Dimensions::new(64, 16) {
    ///     Ok(dims) => dims,
    ///     Err(_) => return,
    /// };
    /// let mut fb = match Framebuffer::new(dims) {
    ///     Some(fb) => fb,
    ///     None => return,
    /// };
    /// fb.print_at(1, 1, 1, &DIGITS, format_args!("{}", 42));
    /// assert!(fb.get_pixel(6, 8));
    /// assert!(fb.get_pixel(12, 8));
    /// ```
    pub fn print_at(
        &mut self,
        x_cell: u32,
        y_cell: u32,
        scale: u32,
        font: &Font<'_>,
        args: fmt::Arguments<'_>,
    ) {
        let mut text = TextBuffer::new();
        // TextBuffer never reports an error; overflow is truncated
        let _ = text.write_fmt(args);

        let x = x_cell.saturating_mul(CELL_WIDTH).saturating_mul(scale);
        let y = y_cell
            .saturating_mul(u32::from(font.y_advance))
            .saturating_mul(scale);
        self.draw_string(to_i32(x), to_i32(y), scale, font, text.as_str());
    }

    /// Draw a cursor over a text cell
    ///
    /// The cell at (x_cell, y_cell) spans `6 * scale` by `8 * scale` pixels.
    pub fn draw_cursor(&mut self, x_cell: u32, y_cell: u32, scale: u32, kind: CursorKind) {
        let width = to_i32(CELL_WIDTH.saturating_mul(scale));
        let height = to_i32(CELL_HEIGHT.saturating_mul(scale));
        let x = to_i32(x_cell).saturating_mul(width);
        let y = to_i32(y_cell).saturating_mul(height);

        match kind {
            CursorKind::None => {}
            CursorKind::Underscore => {
                let baseline = y.saturating_add(height) - 1;
                self.draw_line(x, baseline, x.saturating_add(width) - 2, baseline);
            }
            CursorKind::Block => {
                self.invert_rect(
                    x - 1,
                    y - 1,
                    width.unsigned_abs() + 1,
                    height.unsigned_abs() + 1,
                );
            }
        }
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Fixed-capacity UTF-8 sink that truncates instead of failing
struct TextBuffer {
    bytes: [u8; PRINT_BUFFER_SIZE],
    len: usize,
    truncated: bool,
}

impl TextBuffer {
    fn new() -> Self {
        Self {
            bytes: [0; PRINT_BUFFER_SIZE],
            len: 0,
            truncated: false,
        }
    }

    fn as_str(&self) -> &str {
        self.bytes
            .get(..self.len)
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
            .unwrap_or("")
    }
}

impl Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let room = PRINT_CAPACITY - self.len;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        if take < s.len() {
            self.truncated = true;
        }
        if let (Some(dst), Some(src)) = (
            self.bytes.get_mut(self.len..self.len + take),
            s.as_bytes().get(..take),
        ) {
            dst.copy_from_slice(src);
            self.len += take;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use crate::font::Glyph;
    use alloc::vec::Vec;

    // 'A': 2x2 block, 'B': 1x3 bar shifted right and up, 'C': blank
    const BITMAP: [u8; 2] = [0b1111_0000, 0b1110_0000];
    const GLYPHS: [Glyph; 3] = [
        Glyph::new(0, 2, 2, 3, 0, 0),
        Glyph::new(1, 1, 3, 2, 1, -1),
        Glyph::new(2, 0, 0, 4, 0, 0),
    ];

    fn font() -> Font<'static> {
        Font::new(&BITMAP, &GLYPHS, u16::from(b'A'), u16::from(b'C'), 4)
    }

    fn framebuffer() -> Framebuffer {
        Framebuffer::new(Dimensions::new(32, 16).unwrap()).unwrap()
    }

    fn lit(fb: &Framebuffer) -> Vec<(u32, u32)> {
        let mut pixels = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get_pixel(x, y) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn test_draw_char_scale_one() {
        let mut fb = framebuffer();
        assert_eq!(fb.draw_char(1, 1, 1, &font(), 'A'), 3);
        assert_eq!(lit(&fb), [(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_draw_char_applies_offsets() {
        let mut fb = framebuffer();
        assert_eq!(fb.draw_char(0, 2, 1, &font(), 'B'), 2);
        assert_eq!(lit(&fb), [(1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_draw_char_scaled_blocks() {
        let mut fb = framebuffer();
        assert_eq!(fb.draw_char(0, 0, 2, &font(), 'A'), 3);
        let expected: Vec<(u32, u32)> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn test_draw_char_scaled_offsets_are_scaled() {
        let mut fb = framebuffer();
        fb.draw_char(0, 4, 2, &font(), 'B');
        let expected: Vec<(u32, u32)> = (2..8).flat_map(|y| (2..4).map(move |x| (x, y))).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn test_draw_char_outside_range_is_noop() {
        let mut fb = framebuffer();
        assert_eq!(fb.draw_char(0, 0, 1, &font(), 'Z'), 0);
        assert_eq!(fb.draw_char(0, 0, 1, &font(), '@'), 0);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_draw_char_clipped_at_edge() {
        let mut fb = framebuffer();
        fb.draw_char(-1, -1, 1, &font(), 'A');
        assert_eq!(lit(&fb), [(0, 0)]);
    }

    #[test]
    fn test_draw_string_advances_cursor() {
        let mut fb = framebuffer();
        fb.draw_string(0, 1, 1, &font(), "AB");
        assert_eq!(
            lit(&fb),
            [(4, 0), (0, 1), (1, 1), (4, 1), (0, 2), (1, 2), (4, 2)]
        );
    }

    #[test]
    fn test_draw_string_scales_advance() {
        let mut fb = framebuffer();
        fb.draw_string(0, 0, 2, &font(), "AA");
        assert!(fb.get_pixel(3, 0));
        assert!(!fb.get_pixel(4, 0));
        assert!(!fb.get_pixel(5, 0));
        assert!(fb.get_pixel(6, 0));
        assert!(fb.get_pixel(9, 3));
    }

    #[test]
    fn test_draw_string_skips_unknown_characters() {
        let mut a = framebuffer();
        let mut b = framebuffer();
        a.draw_string(0, 0, 1, &font(), "AzA");
        b.draw_string(0, 0, 1, &font(), "AA");
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_string_cursor_does_not_wrap() {
        let mut fb = framebuffer();
        // 64 blank glyphs of advance 4 put the cursor exactly at 256
        let mut s = alloc::string::String::new();
        for _ in 0..64 {
            s.push('C');
        }
        s.push('A');
        fb.draw_string(0, 0, 1, &font(), &s);
        assert!(!fb.get_pixel(0, 0));
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_measure_string() {
        let font = font();
        assert_eq!(
            measure_string(&font, ""),
            TextSize {
                width: 0,
                height: 4
            }
        );
        assert_eq!(measure_string(&font, "ABC").width, 9);
        assert_eq!(measure_string(&font, "AzC").width, 7);
        assert_eq!(measure_string(&font, "ABC").height, 4);
    }

    #[test]
    fn test_print_at_uses_cell_origin() {
        let mut fb = framebuffer();
        fb.print_at(1, 1, 1, &font(), format_args!("A{}", "B"));
        assert_eq!(
            lit(&fb),
            [(10, 3), (6, 4), (7, 4), (10, 4), (6, 5), (7, 5), (10, 5)]
        );
    }

    #[test]
    fn test_print_at_scaled_origin() {
        let mut fb = framebuffer();
        fb.print_at(1, 1, 2, &font(), format_args!("A"));
        // origin (12, 8), 2x2 glyph drawn as 4x4
        assert!(fb.get_pixel(12, 8));
        assert!(fb.get_pixel(15, 11));
        assert!(!fb.get_pixel(11, 8));
        assert!(!fb.get_pixel(16, 8));
    }

    #[test]
    fn test_print_at_draws_at_most_buffer_size_minus_one_chars() {
        // 1x1 dot advancing 2 pixels: the nth character lands at x = 2 * (n - 1)
        const DOT_BITMAP: [u8; 1] = [0x80];
        const DOT: [Glyph; 1] = [Glyph::new(0, 1, 1, 2, 0, 0)];
        let font = Font::new(&DOT_BITMAP, &DOT, u16::from(b'.'), u16::from(b'.'), 8);

        let mut fb = Framebuffer::new(Dimensions::new(255, 8).unwrap()).unwrap();
        fb.print_at(0, 0, 1, &font, format_args!("{:.<130}", ""));
        assert!(fb.get_pixel(252, 0));
        assert!(!fb.get_pixel(254, 0));
        assert_eq!(lit(&fb).len(), PRINT_BUFFER_SIZE - 1);
    }

    #[test]
    fn test_text_buffer_truncates() {
        let mut text = TextBuffer::new();
        for _ in 0..20 {
            write!(text, "0123456789").unwrap();
        }
        assert_eq!(text.as_str().len(), PRINT_BUFFER_SIZE - 1);
        assert!(text.as_str().starts_with("0123456789"));
        assert!(text.as_str().ends_with("456"));
    }

    #[test]
    fn test_text_buffer_truncates_on_char_boundary() {
        let mut text = TextBuffer::new();
        for _ in 0..(PRINT_BUFFER_SIZE - 2) {
            text.write_str("a").unwrap();
        }
        text.write_str("\u{e9}").unwrap();
        text.write_str("b").unwrap();
        assert_eq!(text.as_str().len(), PRINT_BUFFER_SIZE - 2);
        assert!(text.as_str().chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_cursor_underscore() {
        let mut fb = framebuffer();
        fb.draw_cursor(1, 0, 1, CursorKind::Underscore);
        assert_eq!(lit(&fb), [(6, 7), (7, 7), (8, 7), (9, 7), (10, 7)]);
    }

    #[test]
    fn test_cursor_block_inverts_expanded_cell() {
        let mut fb = framebuffer();
        fb.draw_cursor(1, 1, 1, CursorKind::Block);
        let expected: Vec<(u32, u32)> =
            (7..16).flat_map(|y| (5..12).map(move |x| (x, y))).collect();
        assert_eq!(lit(&fb), expected);

        fb.draw_cursor(1, 1, 1, CursorKind::Block);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_cursor_block_at_origin_is_clipped() {
        let mut fb = framebuffer();
        fb.draw_cursor(0, 0, 1, CursorKind::Block);
        assert_eq!(lit(&fb).len(), 6 * 8);
    }

    #[test]
    fn test_cursor_none_is_noop() {
        let mut fb = framebuffer();
        fb.draw_cursor(2, 1, 1, CursorKind::None);
        assert!(lit(&fb).is_empty());
    }
}
