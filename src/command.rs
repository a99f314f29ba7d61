//! SSD1309 command definitions
//!
//! This module defines the command bytes understood by the SSD1309 OLED
//! controller. Over the 4-wire serial interface every command byte, and every
//! parameter byte that follows it, is sent with the DC line low. Display RAM
//! contents are sent with DC high.
//!
//! ## Command Structure
//!
//! Each byte is framed as:
//! 1. Set DC low (command) or high (data)
//! 2. Assert CS (low)
//! 3. Send the byte(s)
//! 4. Deassert CS (high)
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1309::{command, Builder, Dimensions, Display, ControlLine, DisplayInterface};
//! # use core::convert::Infallible;
//! # struct MockTransport;
//! # impl DisplayInterface for MockTransport {
//! #     type Error = Infallible;
//! #     fn write_bytes(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_control_line(&mut self, _line: ControlLine, _high: bool) -> Result<(), Self::Error> { Ok(()) }
//! #     fn delay_us(&mut self, _us: u32) {}
//! # }
//! # let dims = match Dimensions::new(128, 64) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut display = match Display::init(MockTransport, config) {
//! #     Ok(display) => display,
//! #     Err(_) => return,
//! # };
//! // Dim the panel
//! let _ = display.send_command(command::SET_CONTRAST);
//! let _ = display.send_command(0x40);
//! ```

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Followed by one byte, 0x00 - 0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume to RAM content display (0xA4)
///
/// Output follows display RAM contents.
pub const FOLLOW_RAM_CONTENT: u8 = 0xA4;

/// Entire display on (0xA5)
///
/// Output ignores display RAM contents and lights every pixel.
pub const ALL_PIXELS_ON: u8 = 0xA5;

/// Normal display (0xA6)
///
/// A set RAM bit lights the pixel.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display (0xA7)
///
/// A cleared RAM bit lights the pixel.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// No operation (0xE3)
pub const NOP: u8 = 0xE3;

/// Set command lock (0xFD)
///
/// Followed by one byte: 0x16 unlocks, 0x12 locks the command interface.
pub const SET_COMMAND_LOCK: u8 = 0xFD;

// Scrolling commands

/// Continuous horizontal scroll setup, right (0x26)
pub const H_SCROLL_RIGHT: u8 = 0x26;

/// Continuous horizontal scroll setup, left (0x27)
pub const H_SCROLL_LEFT: u8 = 0x27;

/// Continuous vertical and horizontal scroll setup, right (0x29)
pub const VH_SCROLL_RIGHT: u8 = 0x29;

/// Continuous vertical and horizontal scroll setup, left (0x2A)
pub const VH_SCROLL_LEFT: u8 = 0x2A;

/// Content scroll setup, right (0x2C)
pub const CONTENT_SCROLL_RIGHT: u8 = 0x2C;

/// Content scroll setup, left (0x2D)
pub const CONTENT_SCROLL_LEFT: u8 = 0x2D;

/// Deactivate scroll (0x2E)
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll (0x2F)
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Set vertical scroll area (0xA3)
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;

// Addressing commands

/// Set lower column start address for page addressing mode (0x00)
///
/// The low nibble of the column address is OR-ed into the opcode.
pub const SET_LOW_COLUMN_START: u8 = 0x00;

/// Set higher column start address for page addressing mode (0x10)
///
/// The high nibble of the column address is OR-ed into the opcode.
pub const SET_HIGH_COLUMN_START: u8 = 0x10;

/// Set memory addressing mode (0x20)
///
/// Followed by one byte: 0x00 horizontal, 0x01 vertical, 0x02 page.
pub const SET_MEMORY_ADDRESSING_MODE: u8 = 0x20;

/// Horizontal addressing mode parameter for [`SET_MEMORY_ADDRESSING_MODE`]
pub const ADDRESSING_MODE_HORIZONTAL: u8 = 0x00;

/// Set column address range (0x21)
///
/// Followed by two bytes: start column, end column.
pub const SET_COLUMN_ADDRESS: u8 = 0x21;

/// Set page address range (0x22)
///
/// Followed by two bytes: start page, end page.
pub const SET_PAGE_ADDRESS: u8 = 0x22;

/// Set page start address for page addressing mode (0xB0)
pub const SET_PAGE_START: u8 = 0xB0;

// Hardware configuration commands

/// Set display start line (0x40)
///
/// The start line (0 - 63) is OR-ed into the opcode.
pub const SET_DISPLAY_START_LINE: u8 = 0x40;

/// Segment remap, column 0 mapped to SEG0 (0xA0)
pub const SEGMENT_MAP_NORMAL: u8 = 0xA0;

/// Segment remap, column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_MAP_FLIPPED: u8 = 0xA1;

/// Set multiplex ratio (0xA8)
///
/// Followed by one byte, 0x0F - 0x3F (rows - 1).
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan direction normal (0xC0)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// COM output scan direction flipped (0xC8)
pub const COM_SCAN_FLIPPED: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Followed by one byte, 0x00 - 0x3F.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Followed by one byte, 0x02 - 0x12.
pub const SET_COM_PINS: u8 = 0xDA;

/// Set GPIO (0xDC)
pub const SET_GPIO: u8 = 0xDC;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Followed by one byte: low nibble divide ratio, high nibble frequency.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Followed by one byte: low nibble phase 1, high nibble phase 2.
pub const SET_PRE_CHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Followed by one byte, 0x00 - 0x7F.
pub const SET_VCOMH_DESELECT: u8 = 0xDB;
