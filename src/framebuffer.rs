//! In-memory image of the display RAM
//!
//! [`Framebuffer`] owns exactly `pages * width` bytes laid out the way the
//! controller consumes them with horizontal addressing (see [`layout`](crate::layout)).
//! Every drawing operation in the crate bottoms out in the pixel operations here.
//!
//! Pixels outside the buffer are silently ignored, so primitives that run past an
//! edge are clipped rather than rejected.
//!
//! ## Example
//!
//! ```
//! use ssd1309::{Dimensions, Framebuffer};
//!
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = match Framebuffer::new(dims) {
//!     Some(fb) => fb,
//!     None => return,
//! };
//!
//! fb.set_pixel(3, 4);
//! assert!(fb.get_pixel(3, 4));
//!
//! fb.toggle_pixel(3, 4);
//! assert!(!fb.get_pixel(3, 4));
//!
//! // Off-screen pixels are ignored
//! fb.set_pixel(500, 4);
//! assert!(fb.as_bytes().iter().all(|byte| *byte == 0));
//! ```

use alloc::vec::Vec;

use crate::config::Dimensions;
use crate::layout::locate;

/// Page-organized monochrome framebuffer
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a zeroed framebuffer for the given dimensions
    ///
    /// Returns `None` if the allocation fails.
    pub fn new(dimensions: Dimensions) -> Option<Self> {
        let size = dimensions.buffer_size();
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(size).ok()?;
        buffer.resize(size, 0);
        Some(Self {
            width: u32::from(dimensions.width),
            height: u32::from(dimensions.height),
            buffer,
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

    /// Number of 8-pixel pages
    pub fn pages(&self) -> u32 {
        self.height / 8
    }

    /// Raw RAM image, `pages` rows of `width` bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear every pixel
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Set every pixel
    pub fn fill(&mut self) {
        self.buffer.fill(0xFF);
    }

    /// Whether the pixel at (x, y) is set
    ///
    /// Out-of-range coordinates read as clear.
    pub fn get_pixel(&self, x: u32, y: u32) -> bool {
        locate(x, y, self.width, self.height)
            .and_then(|(index, bit)| self.buffer.get(index).map(|byte| byte & bit != 0))
            .unwrap_or(false)
    }

    /// Set the pixel at (x, y)
    pub fn set_pixel(&mut self, x: u32, y: u32) {
        if let Some((byte, bit)) = self.byte_for(x, y) {
            *byte |= bit;
        }
    }

    /// Clear the pixel at (x, y)
    pub fn clear_pixel(&mut self, x: u32, y: u32) {
        if let Some((byte, bit)) = self.byte_for(x, y) {
            *byte &= !bit;
        }
    }

    /// Invert the pixel at (x, y)
    pub fn toggle_pixel(&mut self, x: u32, y: u32) {
        if let Some((byte, bit)) = self.byte_for(x, y) {
            *byte ^= bit;
        }
    }

    /// Set a pixel given signed coordinates; negative coordinates are clipped
    pub(crate) fn plot(&mut self, x: i32, y: i32) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            self.set_pixel(x, y);
        }
    }

    /// Invert a pixel given signed coordinates; negative coordinates are clipped
    pub(crate) fn toggle(&mut self, x: i32, y: i32) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            self.toggle_pixel(x, y);
        }
    }

    fn byte_for(&mut self, x: u32, y: u32) -> Option<(&mut u8, u8)> {
        let (index, bit) = locate(x, y, self.width, self.height)?;
        self.buffer.get_mut(index).map(|byte| (byte, bit))
    }
}
