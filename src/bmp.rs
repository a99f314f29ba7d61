//! Monochrome bitmap decoding
//!
//! Supports 1 bit per pixel, uncompressed Windows bitmaps. The header fields read
//! are (little-endian):
//!
//! | Offset | Size | Field                  |
//! |--------|------|------------------------|
//! | 10     | 4    | pixel data offset      |
//! | 14     | 4    | info header size       |
//! | 18     | 4    | width (signed)         |
//! | 22     | 4    | height (signed)        |
//! | 28     | 2    | bits per pixel         |
//! | 30     | 4    | compression            |
//!
//! The two-entry color table follows the info header. The entry whose RGB bytes are
//! all zero (black) selects the "ink" bit value; pixels holding that value are drawn,
//! everything else is left untouched. Without a black entry the ink value is 0.
//!
//! Rows are padded to a multiple of 4 bytes. A positive height means rows are
//! stored bottom-up; a negative height means top-down.
//!
//! ## Example
//!
//! ```
//! use ssd1309::{BmpImage, Dimensions, Framebuffer, ImageError};
//!
//! let dims = match Dimensions::new(32, 16) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = match Framebuffer::new(dims) {
//!     Some(fb) => fb,
//!     None => return,
//! };
//!
//! // Anything shorter than a header is rejected and draws nothing
//! assert_eq!(BmpImage::parse(&[0; 10]), Err(ImageError::TooShort { len: 10 }));
//! fb.draw_bmp(&[0; 10]);
//! assert!(fb.as_bytes().iter().all(|byte| *byte == 0));
//! ```

use crate::error::ImageError;
use crate::framebuffer::Framebuffer;

/// Size of the file header plus the smallest info header
pub const HEADER_SIZE: usize = 54;

const FILE_HEADER_SIZE: usize = 14;
const COLOR_TABLE_ENTRIES: usize = 2;
const COLOR_TABLE_ENTRY_SIZE: usize = 4;

/// A validated view of a 1-bit bitmap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpImage<'a> {
    width: u32,
    height: u32,
    top_down: bool,
    ink: u8,
    row_stride: usize,
    rows: &'a [u8],
}

impl<'a> BmpImage<'a> {
    /// Parse and validate a bitmap
    ///
    /// The whole pixel array must be present; nothing is drawn from a partial image.
    pub fn parse(data: &'a [u8]) -> Result<Self, ImageError> {
        if data.len() < HEADER_SIZE {
            return Err(ImageError::TooShort { len: data.len() });
        }
        let header = Header::read(data)?;

        if header.bits_per_pixel != 1 {
            return Err(ImageError::UnsupportedBitDepth(header.bits_per_pixel));
        }
        if header.compression != 0 {
            return Err(ImageError::Compressed(header.compression));
        }
        if header.width <= 0 {
            return Err(ImageError::InvalidWidth(header.width));
        }

        let width = header.width.unsigned_abs();
        let height = header.height.unsigned_abs();
        let top_down = header.height < 0;

        let table_start = FILE_HEADER_SIZE.saturating_add(header.info_size as usize);
        let table_end =
            table_start.saturating_add(COLOR_TABLE_ENTRIES * COLOR_TABLE_ENTRY_SIZE);
        let table = data.get(table_start..table_end).ok_or(ImageError::Truncated {
            required: table_end,
            provided: data.len(),
        })?;
        let ink = table
            .chunks_exact(COLOR_TABLE_ENTRY_SIZE)
            .position(|entry| entry[..3] == [0, 0, 0])
            .unwrap_or(0) as u8;

        let row_stride = row_stride(width);
        let rows_start = header.pixel_offset as usize;
        let rows_end = row_stride
            .checked_mul(height as usize)
            .and_then(|size| size.checked_add(rows_start))
            .unwrap_or(usize::MAX);
        let rows = data.get(rows_start..rows_end).ok_or(ImageError::Truncated {
            required: rows_end,
            provided: data.len(),
        })?;

        Ok(Self {
            width,
            height,
            top_down,
            ink,
            row_stride,
            rows,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether rows are stored top-down (negative height in the header)
    pub fn is_top_down(&self) -> bool {
        self.top_down
    }

    /// Bit value that is drawn
    pub fn ink(&self) -> u8 {
        self.ink
    }

    /// Whether the pixel at (x, y), with y = 0 at the top, is drawn
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let stored_row = if self.top_down {
            y
        } else {
            self.height - 1 - y
        };
        let index = stored_row as usize * self.row_stride + (x >> 3) as usize;
        self.rows
            .get(index)
            .is_some_and(|byte| (byte >> (7 - (x & 7))) & 1 == self.ink)
    }
}

/// Bytes per stored row: whole bytes for `width` bits, padded to a multiple of 4
fn row_stride(width: u32) -> usize {
    (width as usize).div_ceil(8).next_multiple_of(4)
}

struct Header {
    pixel_offset: u32,
    info_size: u32,
    width: i32,
    height: i32,
    bits_per_pixel: u16,
    compression: u32,
}

impl Header {
    fn read(data: &[u8]) -> Result<Self, ImageError> {
        let too_short = ImageError::TooShort { len: data.len() };
        Ok(Self {
            pixel_offset: read_u32(data, 10).ok_or(too_short)?,
            info_size: read_u32(data, 14).ok_or(too_short)?,
            width: read_u32(data, 18).ok_or(too_short)? as i32,
            height: read_u32(data, 22).ok_or(too_short)? as i32,
            bits_per_pixel: read_u16(data, 28).ok_or(too_short)?,
            compression: read_u32(data, 30).ok_or(too_short)?,
        })
    }
}

fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

impl Framebuffer {
    /// Draw a bitmap with its top-left corner at (0, 0)
    pub fn draw_bmp(&mut self, data: &[u8]) {
        self.draw_bmp_at(data, 0, 0);
    }

    /// Draw a bitmap with its top-left corner at (x_offset, y_offset)
    ///
    /// Malformed or unsupported images draw nothing; use [`BmpImage::parse`] to
    /// find out why an image was rejected.
    pub fn draw_bmp_at(&mut self, data: &[u8], x_offset: i32, y_offset: i32) {
        match BmpImage::parse(data) {
            Ok(image) => self.draw_image(&image, x_offset, y_offset),
            Err(e) => log::debug!("Bitmap rejected: {}", e),
        }
    }

    /// Draw a parsed bitmap with its top-left corner at (x_offset, y_offset)
    ///
    /// Only ink pixels are set; other pixels keep their current value.
    pub fn draw_image(&mut self, image: &BmpImage<'_>, x_offset: i32, y_offset: i32) {
        for y in 0..image.height() {
            let py = y_offset.saturating_add_unsigned(y);
            for x in 0..image.width() {
                if image.is_ink(x, y) {
                    self.plot(x_offset.saturating_add_unsigned(x), py);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use alloc::vec;
    use alloc::vec::Vec;

    const BLACK: [u8; 4] = [0x00, 0x00, 0x00, 0x00];
    const WHITE: [u8; 4] = [0xFF, 0xFF, 0xFF, 0x00];

    /// Build a 1-bit bitmap; `stored` rows are in file order and already padded
    fn bitmap(width: i32, height: i32, table: [[u8; 4]; 2], stored: &[&[u8]]) -> Vec<u8> {
        let offset = (HEADER_SIZE + 8) as u32;
        let mut data = vec![0u8; HEADER_SIZE];
        data[0] = b'B';
        data[1] = b'M';
        data[10..14].copy_from_slice(&offset.to_le_bytes());
        data[14..18].copy_from_slice(&40u32.to_le_bytes());
        data[18..22].copy_from_slice(&width.to_le_bytes());
        data[22..26].copy_from_slice(&height.to_le_bytes());
        data[26..28].copy_from_slice(&1u16.to_le_bytes());
        data[28..30].copy_from_slice(&1u16.to_le_bytes());
        data.extend_from_slice(&table[0]);
        data.extend_from_slice(&table[1]);
        for row in stored {
            data.extend_from_slice(row);
        }
        let size = data.len() as u32;
        data[2..6].copy_from_slice(&size.to_le_bytes());
        data
    }

    /// 2x2 diagonal: top-left and bottom-right are black (bit 0)
    fn diagonal() -> Vec<u8> {
        // Stored bottom-up: first row is y = 1
        bitmap(
            2,
            2,
            [BLACK, WHITE],
            &[&[0b1000_0000, 0, 0, 0], &[0b0100_0000, 0, 0, 0]],
        )
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
    fn test_parse_header_fields() {
        let data = diagonal();
        let image = BmpImage::parse(&data).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert!(!image.is_top_down());
        assert_eq!(image.ink(), 0);
    }

    #[test]
    fn test_draw_bottom_up_at_offset() {
        let mut fb = framebuffer();
        fb.draw_bmp_at(&diagonal(), 3, 2);
        assert_eq!(lit(&fb), [(3, 2), (4, 3)]);
    }

    #[test]
    fn test_draw_bmp_uses_origin() {
        let mut fb = framebuffer();
        fb.draw_bmp(&diagonal());
        assert_eq!(lit(&fb), [(0, 0), (1, 1)]);
    }

    #[test]
    fn test_draw_keeps_non_ink_pixels() {
        let mut fb = framebuffer();
        fb.set_pixel(1, 0);
        fb.draw_bmp(&diagonal());
        assert_eq!(lit(&fb), [(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_black_second_entry_makes_ones_ink() {
        let data = bitmap(
            2,
            2,
            [WHITE, BLACK],
            &[&[0b1000_0000, 0, 0, 0], &[0b0100_0000, 0, 0, 0]],
        );
        assert_eq!(BmpImage::parse(&data).unwrap().ink(), 1);

        let mut fb = framebuffer();
        fb.draw_bmp(&data);
        assert_eq!(lit(&fb), [(1, 0), (0, 1)]);
    }

    #[test]
    fn test_no_black_entry_defaults_to_zero() {
        let data = bitmap(2, 1, [WHITE, WHITE], &[&[0b0100_0000, 0, 0, 0]]);
        assert_eq!(BmpImage::parse(&data).unwrap().ink(), 0);
    }

    #[test]
    fn test_top_down_negative_height() {
        let data = bitmap(
            2,
            -2,
            [BLACK, WHITE],
            &[&[0b1000_0000, 0, 0, 0], &[0b0100_0000, 0, 0, 0]],
        );
        let image = BmpImage::parse(&data).unwrap();
        assert!(image.is_top_down());
        assert_eq!(image.height(), 2);

        let mut fb = framebuffer();
        fb.draw_image(&image, 0, 0);
        assert_eq!(lit(&fb), [(1, 0), (0, 1)]);
    }

    #[test]
    fn test_rows_are_padded_to_four_bytes() {
        // 9 pixels wide needs 2 bytes per row, padded to 4
        let data = bitmap(
            9,
            2,
            [WHITE, BLACK],
            &[&[0x00, 0x80, 0xFF, 0xFF], &[0x80, 0x00, 0xFF, 0xFF]],
        );
        let mut fb = framebuffer();
        fb.draw_bmp(&data);
        assert_eq!(lit(&fb), [(0, 0), (8, 1)]);
    }

    #[test]
    fn test_clipped_at_edges() {
        let mut fb = framebuffer();
        fb.draw_bmp_at(&diagonal(), -1, 15);
        assert!(lit(&fb).is_empty());
        fb.draw_bmp_at(&diagonal(), -1, -1);
        assert_eq!(lit(&fb), [(0, 0)]);
    }

    #[test]
    fn test_rejects_bit_depth() {
        let mut data = diagonal();
        data[28..30].copy_from_slice(&8u16.to_le_bytes());
        assert_eq!(
            BmpImage::parse(&data),
            Err(ImageError::UnsupportedBitDepth(8))
        );

        let mut fb = framebuffer();
        fb.draw_bmp(&data);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_rejects_compressed() {
        let mut data = diagonal();
        data[30..34].copy_from_slice(&1u32.to_le_bytes());
        assert_eq!(BmpImage::parse(&data), Err(ImageError::Compressed(1)));
    }

    #[test]
    fn test_rejects_short_header() {
        let data = diagonal();
        assert_eq!(
            BmpImage::parse(&data[..HEADER_SIZE - 1]),
            Err(ImageError::TooShort {
                len: HEADER_SIZE - 1
            })
        );
    }

    #[test]
    fn test_rejects_invalid_width() {
        let data = bitmap(0, 2, [BLACK, WHITE], &[]);
        assert_eq!(BmpImage::parse(&data), Err(ImageError::InvalidWidth(0)));
        let data = bitmap(-4, 2, [BLACK, WHITE], &[]);
        assert_eq!(BmpImage::parse(&data), Err(ImageError::InvalidWidth(-4)));
    }

    #[test]
    fn test_rejects_truncated_rows() {
        let data = diagonal();
        let short = &data[..data.len() - 1];
        assert_eq!(
            BmpImage::parse(short),
            Err(ImageError::Truncated {
                required: data.len(),
                provided: data.len() - 1,
            })
        );

        let mut fb = framebuffer();
        fb.draw_bmp(short);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_rejects_color_table_past_end() {
        let mut data = diagonal();
        data[14..18].copy_from_slice(&1000u32.to_le_bytes());
        assert!(matches!(
            BmpImage::parse(&data),
            Err(ImageError::Truncated { .. })
        ));
    }

    #[test]
    fn test_zero_height_draws_nothing() {
        let data = bitmap(2, 0, [BLACK, WHITE], &[]);
        let mut fb = framebuffer();
        fb.draw_bmp(&data);
        assert!(lit(&fb).is_empty());
    }
}
