//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] trait from the embedded-graphics ecosystem
//! for [`Framebuffer`], and for [`Display`] by delegating to its framebuffer. Pixels
//! go through the same rotated page layout and clipping as the native drawing
//! operations, so both can be mixed freely.
//!
//! [`BinaryColor::On`] sets a pixel, [`BinaryColor::Off`] clears it.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
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
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut fb);
//!
//! let _ = Circle::new(Point::new(80, 10), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
//!     .draw(&mut fb);
//!
//! assert!(fb.get_pixel(10, 10));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Display;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                continue;
            };
            match color {
                BinaryColor::On => self.set_pixel(x, y),
                BinaryColor::Off => self.clear_pixel(x, y),
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        match color {
            BinaryColor::Off => Framebuffer::clear(self),
            BinaryColor::On => self.fill(),
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer_mut().draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(self.framebuffer_mut(), color)
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        self.framebuffer().size()
    }
}
