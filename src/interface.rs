//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for talking to the SSD1309 controller over 4-wire SPI.
//!
//! ## Hardware Requirements
//!
//! The SSD1309 requires:
//! - SPI bus (MOSI + SCK)
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output, low = command)
//!   - **CS**: Chip select (output, active low)
//!   - **RST**: Reset (output, active low)
//!
//! The driver frames every transfer itself (DC, then CS low, bytes, CS high), so the
//! bundled [`Interface`] takes a raw [`SpiBus`] rather than an `SpiDevice`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1309::{ControlLine, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
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
//! // Create interface with SPI bus, GPIO pins and a delay source
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, MockDelay);
//!
//! // Send a single command byte by hand
//! let _ = interface.set_control_line(ControlLine::DataCommand, false);
//! let _ = interface.set_control_line(ControlLine::ChipSelect, false);
//! let _ = interface.write_bytes(&[0xAF]); // Display on
//! let _ = interface.set_control_line(ControlLine::ChipSelect, true);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Control lines driven alongside the serial bus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlLine {
    /// Data/Command select (low = command, high = data)
    DataCommand,
    /// Chip select (active low)
    ChipSelect,
    /// Reset (active low)
    Reset,
}

/// Trait for the transport to the SSD1309 controller
///
/// This trait is the only way the [`Display`](crate::display::Display) reaches
/// hardware, so tests can substitute a recording double.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this trait
/// yourself when the bus is shared, bit-banged, or otherwise needs custom handling.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write bytes over the serial bus
    ///
    /// Framing (DC and CS) is handled by the caller through
    /// [`set_control_line`](Self::set_control_line).
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn write_bytes(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Drive one of the control lines
    ///
    /// `high == true` drives the line high.
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO operation fails.
    fn set_control_line(&mut self, line: ControlLine, high: bool)
    -> InterfaceResult<(), Self::Error>;

    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for SSD1309
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI bus, GPIO and delay traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `D` - Delay source implementing [`DelayNs`]
pub struct Interface<SPI, DC, CS, RST, D> {
    /// SPI bus for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Chip select pin (active low)
    cs: CS,
    /// Reset pin (active low)
    rst: RST,
    /// Blocking delay used during reset sequencing
    delay: D,
}

impl<SPI, DC, CS, RST, D> Interface<SPI, DC, CS, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `cs` - Chip select pin (output, active low)
    /// * `rst` - Reset pin (output, active low)
    /// * `delay` - Delay source
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST, delay: D) -> Self {
        Self {
            spi,
            dc,
            cs,
            rst,
            delay,
        }
    }

    /// Release the bus, pins and delay source
    pub fn release(self) -> (SPI, DC, CS, RST, D) {
        (self.spi, self.dc, self.cs, self.rst, self.delay)
    }
}

impl<SPI, DC, CS, RST, D, PinErr> DisplayInterface for Interface<SPI, DC, CS, RST, D>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn write_bytes(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.spi.write(bytes).map_err(InterfaceError::Spi)?;
        // CS may be released right after this returns
        self.spi.flush().map_err(InterfaceError::Spi)
    }

    fn set_control_line(
        &mut self,
        line: ControlLine,
        high: bool,
    ) -> InterfaceResult<(), Self::Error> {
        let state = PinState::from(high);
        match line {
            ControlLine::DataCommand => self.dc.set_state(state),
            ControlLine::ChipSelect => self.cs.set_state(state),
            ControlLine::Reset => self.rst.set_state(state),
        }
        .map_err(InterfaceError::Pin)
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
