//! SSD1309 OLED Display Driver
//!
//! A framebuffered driver for the SSD1309 monochrome OLED controller (128x64 and
//! smaller panels) over 4-wire SPI.
//!
//! ## Features
//!
//! - `no_std` compatible (needs `alloc` for the framebuffer)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable dimensions and power-up register values
//! - Lines, rectangles, GFX-format bitmap fonts and 1-bit BMP images
//! - Text-grid helpers: formatted printing and cursors
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use ssd1309::{Builder, Dimensions, Display, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let cs = MockPin;
//! # let rst = MockPin;
//! # let delay = MockDelay;
//! let interface = Interface::new(spi, dc, cs, rst, delay);
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).contrast(0x80).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::init(interface, config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let fb = display.framebuffer_mut();
//! fb.draw_empty_rect(0, 0, 127, 63);
//! fb.draw_line(0, 0, 127, 63);
//! let _ = display.flush();
//! ```

#![no_std]

extern crate alloc;

/// Monochrome bitmap decoding
pub mod bmp;
/// SSD1309 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Bitmap font descriptors
pub mod font;
/// In-memory image of the display RAM
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Pixel addressing utilities
pub mod layout;
/// Lines and rectangles
pub mod primitives;
/// Glyph rendering and simple text placement
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use bmp::BmpImage;
pub use config::{Builder, Config, Dimensions, MAX_HEIGHT, MAX_WIDTH};
pub use display::{Display, PowerState};
pub use error::{BuilderError, Error, ImageError};
pub use font::{Font, Glyph};
pub use framebuffer::Framebuffer;
pub use interface::{ControlLine, DisplayInterface, Interface, InterfaceError};
pub use text::{CursorKind, TextSize, measure_string};
