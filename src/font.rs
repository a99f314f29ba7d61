//! Bitmap font descriptors
//!
//! Fonts use the Adafruit GFX layout: a table of [`Glyph`] records indexed by
//! `character - first`, and one shared bitmap blob. Each glyph's pixels start at
//! its `bitmap_offset` and are packed row-major, MSB first, with no padding between
//! rows; only the glyph's last byte may be partially used.
//!
//! Font tables are supplied by the application, typically as `static` data converted
//! from an existing GFX font header.
//!
//! ## Example
//!
//! ```
//! use ssd1309::font::{Font, Glyph};
//!
//! // A 2x2 checkerboard for 'A' and a blank 'B'
//! static BITMAP: [u8; 1] = [0b1001_0000];
//! static GLYPHS: [Glyph; 2] = [
//!     Glyph::new(0, 2, 2, 3, 0, -2),
//!     Glyph::new(1, 0, 0, 3, 0, 0),
//! ];
//! static FONT: Font<'static> = Font::new(&BITMAP, &GLYPHS, b'A' as u16, b'B' as u16, 3);
//!
//! let glyph = match FONT.glyph('A') {
//!     Some(glyph) => glyph,
//!     None => return,
//! };
//! assert!(FONT.is_set(glyph, 0, 0));
//! assert!(!FONT.is_set(glyph, 1, 0));
//! assert!(FONT.is_set(glyph, 1, 1));
//! assert!(FONT.glyph('C').is_none());
//! ```

/// Metrics and bitmap location of one character
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    /// Byte offset of the glyph's pixels in [`Font::bitmap`]
    pub bitmap_offset: u16,
    /// Bitmap width in pixels
    pub width: u8,
    /// Bitmap height in pixels
    pub height: u8,
    /// Horizontal distance to the next character origin
    pub x_advance: u8,
    /// Horizontal offset from the cursor to the bitmap's left edge
    pub x_offset: i8,
    /// Vertical offset from the cursor to the bitmap's top edge
    pub y_offset: i8,
}

impl Glyph {
    /// Create a glyph record
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }
}

/// A bitmap font covering the character range `[first, last]`
#[derive(Clone, Copy, Debug)]
pub struct Font<'a> {
    /// Packed glyph pixels
    pub bitmap: &'a [u8],
    /// One record per character, indexed by `character - first`
    pub glyphs: &'a [Glyph],
    /// First character code covered
    pub first: u16,
    /// Last character code covered (inclusive)
    pub last: u16,
    /// Line height in pixels
    pub y_advance: u8,
}

impl<'a> Font<'a> {
    /// Create a font descriptor
    pub const fn new(
        bitmap: &'a [u8],
        glyphs: &'a [Glyph],
        first: u16,
        last: u16,
        y_advance: u8,
    ) -> Self {
        Self {
            bitmap,
            glyphs,
            first,
            last,
            y_advance,
        }
    }

    /// Look up the glyph for `c`
    ///
    /// Returns `None` if `c` is outside `[first, last]` or the glyph table is short.
    pub fn glyph(&self, c: char) -> Option<&'a Glyph> {
        let code = u32::from(c);
        if code < u32::from(self.first) || code > u32::from(self.last) {
            return None;
        }
        self.glyphs.get((code - u32::from(self.first)) as usize)
    }

    /// Whether the glyph pixel at column `x`, row `y` is set
    ///
    /// Pixels whose bytes lie past the end of the bitmap read as clear.
    pub fn is_set(&self, glyph: &Glyph, x: u8, y: u8) -> bool {
        if x >= glyph.width || y >= glyph.height {
            return false;
        }
        let bit = usize::from(y) * usize::from(glyph.width) + usize::from(x);
        self.bitmap
            .get(usize::from(glyph.bitmap_offset) + bit / 8)
            .is_some_and(|byte| byte & (0x80 >> (bit % 8)) != 0)
    }
}
