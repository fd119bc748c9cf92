//! ST7735 TFT Display Driver
//!
//! A driver for the ST7735 color TFT controller found on small (typically
//! 128x160 and 128x128) SPI panels.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Red tab and green tab controller revisions
//! - Rotation and RGB/BGR color order
//! - Window addressing with per-panel offsets
//! - Hardware vertical scrolling
//!
//! The driver keeps no frame buffer. Pixel data goes straight from the caller's
//! slice to the bus as big-endian RGB565.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use st7735::{Builder, ColorOrder, Display, Interface, Rotation, Variant};
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
//! # let rst = MockPin;
//! # let cs = MockPin;
//! # let mut delay = MockDelay;
//! let interface = match Interface::new(spi, dc, rst, cs) {
//!     Ok(interface) => interface,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().color_order(ColorOrder::Rgb).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.initialize(Variant::RedTab, &mut delay);
//! let _ = display.set_rotation(Rotation::Rotate90);
//!
//! // 10x10 block, two bytes per pixel
//! let _ = display.blit(0, 0, 9, 9, &[0xF8; 200]);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// ST7735 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Controller revisions and their initialization tables
pub mod variant;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use config::{Builder, ColorOrder, Config, Dimensions, MAX_AXIS, Rotation};
pub use display::{BYTES_PER_PIXEL, Display, ScrollArea, Window};
pub use error::{BuilderError, Error};
pub use interface::{DisplayInterface, Interface, InterfaceError, RESET_PULSE_US};
pub use variant::{NormalModeOrder, Variant, VariantTables};
