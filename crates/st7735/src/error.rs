//! Error types for the driver
//!
//! - [`BuilderError`] - rejected [`Config`](crate::config::Config) values
//! - [`Error`] - failures of a [`Display`](crate::display::Display) operation
//! - [`InterfaceError`](crate::interface::InterfaceError) - SPI or GPIO failures
//!   of the provided [`Interface`](crate::interface::Interface)
//!
//! Input errors ([`Error::UnsupportedVariant`], [`Error::InvalidRotation`],
//! [`Error::InvalidWindow`], [`Error::PixelCountMismatch`],
//! [`Error::InvalidScrollArea`]) are detected before anything is written to
//! the bus, so the controller and the driver state are untouched. A control
//! loop can log and drop them. An [`Error::Interface`] leaves the controller in
//! an unknown state: reset and initialize again before continuing.
//!
//! ## Example
//!
//! ```
//! use st7735::{BuilderError, Dimensions};
//!
//! // Zero-sized axis
//! let result = Dimensions::new(0, 160);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Too large for single-byte addressing
//! let result = Dimensions::new(320, 240);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Largest supported axis in pixels
///
/// Window coordinates go out as single bytes, so the last pixel on an axis
/// (plus the panel offset) must be at most 255.
pub const MAX_AXIS: u16 = 256;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// Chip select may still be asserted.
    Interface(I::Error),
    /// Tab letter is not one of the supported revisions ("R", "G")
    UnsupportedVariant,
    /// Rotation index outside 0-3
    InvalidRotation(u8),
    /// Window is inverted, outside the current dimensions, or does not fit the
    /// single-byte address range once the offset is added
    InvalidWindow {
        /// First column
        x0: u16,
        /// First row
        y0: u16,
        /// Last column
        x1: u16,
        /// Last row
        y1: u16,
    },
    /// Pixel data length does not match the window
    PixelCountMismatch {
        /// Bytes needed for the window at 16 bits per pixel
        expected: usize,
        /// Bytes provided
        provided: usize,
    },
    /// Fixed areas do not fit in the panel height, or the scroll line is
    /// outside the scrolling area
    InvalidScrollArea {
        /// Top fixed area in lines
        top: u16,
        /// Bottom fixed area in lines
        bottom: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::UnsupportedVariant => write!(f, "Unsupported variant (expected \"R\" or \"G\")"),
            Error::InvalidRotation(value) => write!(f, "Invalid rotation {value} (expected 0-3)"),
            Error::InvalidWindow { x0, y0, x1, y1 } => {
                write!(f, "Invalid window ({x0}, {y0})-({x1}, {y1})")
            }
            Error::PixelCountMismatch { expected, provided } => {
                write!(
                    f,
                    "Pixel data mismatch: window needs {expected} bytes, provided {provided}"
                )
            }
            Error::InvalidScrollArea { top, bottom } => {
                write!(f, "Invalid scroll area: top {top}, bottom {bottom}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (each axis 1..={MAX_AXIS}, including offset)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
