//! Core display operations

use crate::command::{
    ALL_PIXELS_ON, DISPLAY_OFF, DISPLAY_ON, FOLLOW_RAM_CONTENT, INVERT_DISPLAY, NORMAL_DISPLAY,
    SET_CLOCK_DIVIDE, SET_COLUMN_ADDRESS, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET,
    SET_HIGH_COLUMN_START, SET_LOW_COLUMN_START, SET_MEMORY_ADDRESSING_MODE, SET_MULTIPLEX_RATIO,
    SET_PAGE_ADDRESS, SET_PRE_CHARGE, SET_VCOMH_DESELECT,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::{ControlLine, DisplayInterface};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// How long the reset line is held low, in microseconds
pub const RESET_PULSE_US: u32 = 5;

/// How long to wait after releasing the reset line, in microseconds
pub const RESET_RECOVERY_US: u32 = 10_000;

/// Lifecycle of a [`Display`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerState {
    /// Nothing has been sent to the controller
    #[default]
    Uninitialized,
    /// The controller has been reset and holds its power-on defaults
    Resetting,
    /// The configuration script is being sent
    Configuring,
    /// Configured, panel off
    PoweredOff,
    /// Configured, panel on
    PoweredOn,
}

/// SSD1309 session: the transport, the configuration and the framebuffer
///
/// Drawing happens on the [`Framebuffer`] (see [`framebuffer_mut`](Self::framebuffer_mut));
/// nothing reaches the panel until [`flush`](Self::flush).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Local copy of the display RAM
    framebuffer: Framebuffer,
    state: PowerState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Allocate the framebuffer and bring the panel up
    ///
    /// Resets the controller, sends the configuration script, turns the panel on and
    /// flushes a blank frame.
    pub fn init(interface: I, config: Config) -> Result<Self, Error<I>> {
        let framebuffer = Framebuffer::new(config.dimensions).ok_or(Error::Allocation {
            bytes: config.dimensions.buffer_size(),
        })?;

        let mut display = Self {
            interface,
            config,
            framebuffer,
            state: PowerState::Uninitialized,
        };
        display.reset()?;
        display.configure()?;
        display.set_power(true)?;
        display.framebuffer.clear();
        display.flush()?;
        Ok(display)
    }

    /// Pulse the reset line
    ///
    /// The controller returns to its power-on defaults; call
    /// [`configure`](Self::configure) before turning the panel back on.
    pub fn reset(&mut self) -> DisplayResult<I> {
        log::debug!("Resetting display");
        self.state = PowerState::Resetting;
        self.interface
            .set_control_line(ControlLine::Reset, false)
            .map_err(Error::Interface)?;
        self.interface.delay_us(RESET_PULSE_US);
        self.interface
            .set_control_line(ControlLine::Reset, true)
            .map_err(Error::Interface)?;
        self.interface.delay_us(RESET_RECOVERY_US);
        Ok(())
    }

    /// Turn the panel off and send the configuration script
    ///
    /// Every byte, parameters included, is framed as its own command.
    pub fn configure(&mut self) -> DisplayResult<I> {
        log::debug!("Configuring display: {:?}", self.config);
        self.state = PowerState::Configuring;
        self.send_command(DISPLAY_OFF)?;

        let config = self.config;
        let script = [
            SET_LOW_COLUMN_START,
            SET_HIGH_COLUMN_START,
            SET_MEMORY_ADDRESSING_MODE,
            config.addressing_mode,
            SET_CONTRAST,
            config.contrast,
            NORMAL_DISPLAY,
            SET_MULTIPLEX_RATIO,
            config.multiplex_ratio,
            SET_DISPLAY_OFFSET,
            config.display_offset,
            SET_CLOCK_DIVIDE,
            config.clock_divide,
            SET_PRE_CHARGE,
            config.pre_charge,
            SET_COM_PINS,
            config.com_pins,
            SET_VCOMH_DESELECT,
            config.vcomh_deselect,
            FOLLOW_RAM_CONTENT,
        ];
        for byte in script {
            self.send_command(byte)?;
        }

        self.state = PowerState::PoweredOff;
        Ok(())
    }

    /// Turn the panel on or off
    ///
    /// Display RAM is retained while the panel is off.
    pub fn set_power(&mut self, on: bool) -> DisplayResult<I> {
        log::debug!("Display power {}", if on { "on" } else { "off" });
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })?;
        self.state = if on {
            PowerState::PoweredOn
        } else {
            PowerState::PoweredOff
        };
        Ok(())
    }

    /// Set the contrast, 0x00 (dimmest) to 0xFF
    pub fn set_contrast(&mut self, value: u8) -> DisplayResult<I> {
        self.send_command(SET_CONTRAST)?;
        self.send_command(value)?;
        self.config.contrast = value;
        Ok(())
    }

    /// Invert the panel output without touching display RAM
    pub fn set_invert(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Light every pixel regardless of RAM contents, or resume following RAM
    pub fn set_all_pixels_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { ALL_PIXELS_ON } else { FOLLOW_RAM_CONTENT })
    }

    /// Write the whole framebuffer to display RAM
    ///
    /// Sets the column range to `[0, width - 1]` and the page range to
    /// `[0, pages - 1]`, then sends the buffer as one data transfer.
    pub fn flush(&mut self) -> DisplayResult<I> {
        let last_column = (self.config.dimensions.width - 1) as u8;
        let last_page = (self.config.dimensions.pages() - 1) as u8;
        log::trace!(
            "Flushing {} bytes (columns 0..={}, pages 0..={})",
            self.framebuffer.as_bytes().len(),
            last_column,
            last_page
        );

        for byte in [SET_COLUMN_ADDRESS, 0, last_column, SET_PAGE_ADDRESS, 0, last_page] {
            self.send_command(byte)?;
        }
        Self::transfer(&mut self.interface, true, self.framebuffer.as_bytes())
    }

    /// Send a single command byte
    ///
    /// Parameter bytes are sent the same way, one call each.
    pub fn send_command(&mut self, command: u8) -> DisplayResult<I> {
        Self::transfer(&mut self.interface, false, &[command])
    }

    /// Send bytes to display RAM at the controller's current address
    pub fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        Self::transfer(&mut self.interface, true, data)
    }

    /// Frame one transfer: select DC, assert CS, write, release CS
    ///
    /// CS is released even if the write fails; the first error is returned.
    fn transfer(interface: &mut I, data: bool, bytes: &[u8]) -> DisplayResult<I> {
        interface
            .set_control_line(ControlLine::DataCommand, data)
            .map_err(Error::Interface)?;
        interface
            .set_control_line(ControlLine::ChipSelect, false)
            .map_err(Error::Interface)?;
        let written = interface.write_bytes(bytes);
        let released = interface.set_control_line(ControlLine::ChipSelect, true);
        written.and(released).map_err(Error::Interface)
    }

    /// Drawing surface
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Mutable drawing surface
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// End the session, freeing the framebuffer and returning the interface
    ///
    /// The panel is left as it is; turn it off first if needed.
    pub fn deinit(self) -> I {
        log::debug!("Releasing display");
        self.interface
    }
}
