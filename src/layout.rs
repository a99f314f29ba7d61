//! Pixel addressing utilities
//!
//! This module maps logical (x, y) pixel coordinates to their location in the
//! SSD1309 display RAM image held by [`Framebuffer`](crate::Framebuffer).
//!
//! The controller organizes RAM in pages: each page is an 8-pixel-tall band, and
//! each byte of a page holds one physical column of 8 vertically stacked pixels,
//! LSB at the top. With horizontal addressing the buffer is `pages` rows of
//! `width` bytes.
//!
//! Logical coordinates are rotated 180 degrees relative to the physical RAM:
//!
//! - `physical_x = width - x - 1`
//! - `physical_y = height - y - 1`
//!
//! ## Example
//!
//! ```
//! use ssd1309::layout::locate;
//!
//! // On a 128x64 panel, logical (0, 0) is the last byte of the last page, bit 7
//! assert_eq!(locate(0, 0, 128, 64), Some((1023, 0x80)));
//!
//! // Logical (127, 63) is the first byte of the first page, bit 0
//! assert_eq!(locate(127, 63, 128, 64), Some((0, 0x01)));
//!
//! // Out-of-range coordinates have no location
//! assert_eq!(locate(128, 0, 128, 64), None);
//! ```

/// Locate a logical pixel in the page-organized buffer
///
/// Returns `(byte_index, bit_mask)`, or `None` if `x >= width` or `y >= height`.
///
/// # Arguments
///
/// * `x` - X coordinate (column), 0 to width-1
/// * `y` - Y coordinate (row), 0 to height-1
/// * `width` - Display width in pixels
/// * `height` - Display height in pixels (multiple of 8)
pub fn locate(x: u32, y: u32, width: u32, height: u32) -> Option<(usize, u8)> {
    if x >= width || y >= height {
        return None;
    }

    let physical_x = width - x - 1;
    let physical_y = height - y - 1;

    let index = (physical_x + (physical_y / 8) * width) as usize;
    let bit = 0x01 << (physical_y % 8);
    Some((index, bit))
}
