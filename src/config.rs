//! Display configuration types and builder

use crate::command::ADDRESSING_MODE_HORIZONTAL;
pub use crate::error::{BuilderError, MAX_HEIGHT, MAX_WIDTH};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (corresponds to segment outputs)
    pub width: u16,
    /// Height in pixels (corresponds to COM outputs)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or > MAX_WIDTH
    /// - height is 0 or > MAX_HEIGHT
    /// - height % 8 != 0 (must be whole pages)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_HEIGHT || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-pixel pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.pages() as usize * self.width as usize
    }
}

/// Display configuration
///
/// Register values written by the power-up command script.
/// Use `Builder` to create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Memory addressing mode byte (0x00 horizontal, 0x01 vertical, 0x02 page)
    pub addressing_mode: u8,
    /// Contrast control value
    pub contrast: u8,
    /// Multiplex ratio (rows - 1)
    pub multiplex_ratio: u8,
    /// Vertical display offset
    pub display_offset: u8,
    /// Display clock divide ratio / oscillator frequency
    pub clock_divide: u8,
    /// Pre-charge period
    pub pre_charge: u8,
    /// COM pins hardware configuration
    pub com_pins: u8,
    /// VCOMH deselect level
    pub vcomh_deselect: u8,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use ssd1309::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).contrast(0x7F).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.contrast, 0x7F);
/// assert_eq!(config.multiplex_ratio, 0x3F);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    addressing_mode: u8,
    contrast: u8,
    multiplex_ratio: u8,
    display_offset: u8,
    clock_divide: u8,
    pre_charge: u8,
    com_pins: u8,
    vcomh_deselect: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            // Horizontal addressing so one data transfer fills the whole RAM
            addressing_mode: ADDRESSING_MODE_HORIZONTAL,
            contrast: 0xFF,
            // 64 MUX
            multiplex_ratio: 0x3F,
            display_offset: 0x00,
            clock_divide: 0x80,
            pre_charge: 0x22,
            // Alternative COM pin configuration
            com_pins: 0x12,
            vcomh_deselect: 0x40,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set memory addressing mode byte
    pub fn addressing_mode(mut self, value: u8) -> Self {
        self.addressing_mode = value;
        self
    }

    /// Set initial contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set multiplex ratio (0x0F - 0x3F)
    pub fn multiplex_ratio(mut self, value: u8) -> Self {
        self.multiplex_ratio = value;
        self
    }

    /// Set vertical display offset (0x00 - 0x3F)
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set display clock divide ratio / oscillator frequency
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set pre-charge period
    pub fn pre_charge(mut self, value: u8) -> Self {
        self.pre_charge = value;
        self
    }

    /// Set COM pins hardware configuration (0x02 - 0x12)
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set VCOMH deselect level (0x00 - 0x7F)
    pub fn vcomh_deselect(mut self, value: u8) -> Self {
        self.vcomh_deselect = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            addressing_mode: self.addressing_mode,
            contrast: self.contrast,
            multiplex_ratio: self.multiplex_ratio,
            display_offset: self.display_offset,
            clock_divide: self.clock_divide,
            pre_charge: self.pre_charge,
            com_pins: self.com_pins,
            vcomh_deselect: self.vcomh_deselect,
        })
    }
}
