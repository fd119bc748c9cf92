//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7735 controller over a 4-wire SPI bus.
//!
//! ## Hardware Requirements
//!
//! The ST7735 requires:
//! - SPI bus (MOSI + SCK), write-only
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!   - **CS**: Chip select (output, active low)
//!
//! Chip select is driven by the interface rather than the SPI peripheral, so that
//! every command or data burst is bracketed exactly once.
//!
//! ## Example
//!
//! ```rust,ignore
//! use st7735::{DisplayInterface, Interface};
//!
//! let mut interface = Interface::new(spi_bus, dc_pin, rst_pin, cs_pin)?;
//!
//! // Software reset
//! interface.send_command(0x01)?;
//!
//! // Parameter bytes
//! interface.send_data(&[0x01, 0x2C, 0x2D])?;
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Width of each phase of the hardware reset pulse train, in microseconds
pub const RESET_PULSE_US: u32 = 500;

/// Trait for hardware interface to the ST7735 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies the transaction contract below.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this trait
/// yourself when the bus is shared behind a mutex or the pins sit on an expander.
/// Every call must be one complete chip-select bracketed transaction.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Assert CS
    /// 3. Send the command byte
    /// 4. Deassert CS
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails. CS may be left asserted.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send parameter or pixel bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Assert CS
    /// 3. Send all bytes, in order
    /// 4. Deassert CS
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails. CS may be left asserted.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Pulse the reset line
    ///
    /// DC is held low, then RST goes high, low and high again with
    /// [`RESET_PULSE_US`] between each edge and after the last one.
    fn hard_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Drive CS to its idle (high) level
    fn release_chip_select(&mut self) -> Result<(), Self::Error>;
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
            InterfaceError::Spi(e) => write!(f, "SPI error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for the ST7735
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI bus and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`] (no hardware chip select)
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `CS` - Chip select pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST, CS> {
    /// SPI bus for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Chip select pin (active low)
    cs: CS,
}

impl<SPI, DC, RST, CS, PinErr> Interface<SPI, DC, RST, CS>
where
    SPI: SpiBus,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
{
    /// Create a new Interface
    ///
    /// Drives CS high so the controller starts deselected. The other lines are
    /// left at whatever level the caller configured.
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `cs` - Chip select pin (output, active low)
    pub fn new(
        spi: SPI,
        dc: DC,
        rst: RST,
        mut cs: CS,
    ) -> Result<Self, InterfaceError<SPI::Error, PinErr>> {
        cs.set_high().map_err(InterfaceError::Pin)?;
        Ok(Self { spi, dc, rst, cs })
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, DC, RST, CS) {
        (self.spi, self.dc, self.rst, self.cs)
    }

    fn transaction(&mut self, bytes: &[u8]) -> Result<(), InterfaceError<SPI::Error, PinErr>> {
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(bytes).map_err(InterfaceError::Spi)?;
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_high().map_err(InterfaceError::Pin)
    }
}

impl<SPI, DC, RST, CS, PinErr> DisplayInterface for Interface<SPI, DC, RST, CS>
where
    SPI: SpiBus,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    CS: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.transaction(&[command])
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.transaction(data)
    }

    fn hard_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        Ok(())
    }

    fn release_chip_select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(InterfaceError::Pin)
    }
}
