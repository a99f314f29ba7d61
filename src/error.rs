//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! display operations ([`Error`]) and bitmap parsing ([`ImageError`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`ImageError`] - Reasons a bitmap image was rejected
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use ssd1309::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Height must be a whole number of pages
//! let result = Dimensions::new(128, 60);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum number of columns addressable by the driver
///
/// Column addresses are sent as single bytes.
pub const MAX_WIDTH: u16 = 255;

/// Maximum number of rows addressable by the driver
///
/// Height is held in a single byte and must form whole 8-pixel pages, so the
/// limit is the largest multiple of 8 below 256.
pub const MAX_HEIGHT: u16 = 248;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// The framebuffer could not be allocated
    Allocation {
        /// Requested framebuffer size in bytes
        bytes: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::Allocation { bytes } => {
                write!(f, "Failed to allocate {bytes} byte framebuffer")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Requested width in pixels
        width: u16,
        /// Requested height in pixels
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_WIDTH}x{MAX_HEIGHT}, height must be multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Reasons a monochrome bitmap was rejected
///
/// Returned by [`BmpImage::parse`](crate::bmp::BmpImage::parse). The drawing
/// entry points on [`Framebuffer`](crate::Framebuffer) swallow these and draw nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageError {
    /// Buffer is shorter than the 54-byte header
    TooShort {
        /// Length of the provided buffer
        len: usize,
    },
    /// Only 1 bit per pixel is supported
    UnsupportedBitDepth(u16),
    /// Only uncompressed images are supported
    Compressed(u32),
    /// Width is zero or negative
    InvalidWidth(i32),
    /// Color table or pixel rows extend past the end of the buffer
    Truncated {
        /// Bytes needed to hold the whole image
        required: usize,
        /// Length of the provided buffer
        provided: usize,
    },
}

impl core::fmt::Display for ImageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooShort { len } => write!(f, "Bitmap too short: {len} bytes"),
            Self::UnsupportedBitDepth(bits) => {
                write!(f, "Unsupported bit depth: {bits} (only 1 is supported)")
            }
            Self::Compressed(method) => write!(f, "Compressed bitmap (method {method})"),
            Self::InvalidWidth(width) => write!(f, "Invalid bitmap width: {width}"),
            Self::Truncated { required, provided } => write!(
                f,
                "Bitmap truncated: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for ImageError {}
