//! Display configuration types and builder

use crate::command::{MADCTL_BGR, MADCTL_RGB, ROTATION_TABLE};
pub use crate::error::{BuilderError, MAX_AXIS};

/// Display dimensions in the orientation given at construction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either axis is zero or larger
    /// than [`MAX_AXIS`]. The controller addresses each axis with a single byte.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_AXIS || height == 0 || height > MAX_AXIS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

impl Default for Dimensions {
    /// The common 1.8" panel: 128x160
    fn default() -> Self {
        Self {
            width: 128,
            height: 160,
        }
    }
}

/// Display rotation in clockwise steps from the "connector on top" layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Number of clockwise quarter turns (0-3)
    pub fn steps(self) -> u8 {
        match self {
            Rotation::Rotate0 => 0,
            Rotation::Rotate90 => 1,
            Rotation::Rotate180 => 2,
            Rotation::Rotate270 => 3,
        }
    }

    /// Row/column exchange bits for MADCTL
    pub fn madctl_bits(self) -> u8 {
        ROTATION_TABLE[self.steps() as usize]
    }

    /// True when going from `self` to `other` exchanges the long and short axis
    pub fn swaps_axes(self, other: Rotation) -> bool {
        (self.steps() ^ other.steps()) & 1 != 0
    }
}

impl TryFrom<u8> for Rotation {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::Rotate0),
            1 => Ok(Rotation::Rotate90),
            2 => Ok(Rotation::Rotate180),
            3 => Ok(Rotation::Rotate270),
            other => Err(other),
        }
    }
}

/// Color filter order of the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Blue, green, red
    Bgr,
}

impl ColorOrder {
    /// Color order bit for MADCTL
    pub fn madctl_bit(self) -> u8 {
        match self {
            ColorOrder::Rgb => MADCTL_RGB,
            ColorOrder::Bgr => MADCTL_BGR,
        }
    }
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Display dimensions for the initial rotation
    pub dimensions: Dimensions,
    /// Initial rotation
    pub rotation: Rotation,
    /// Initial color order
    pub color_order: ColorOrder,
    /// Column and row address bias added to every window coordinate
    pub offset: (u8, u8),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            rotation: Rotation::Rotate0,
            color_order: ColorOrder::Rgb,
            offset: (0, 0),
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use st7735::{Builder, ColorOrder, Dimensions, Rotation};
///
/// let config = Builder::new()
///     .dimensions(Dimensions::new(128, 160).unwrap())
///     .rotation(Rotation::Rotate90)
///     .color_order(ColorOrder::Bgr)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.dimensions.width, 128);
/// ```
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.config.dimensions = dims;
        self
    }

    /// Set initial rotation
    ///
    /// The dimensions are taken as already matching this rotation.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Set color order
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.config.color_order = order;
        self
    }

    /// Set the panel's column and row address offset
    pub fn offset(mut self, x: u8, y: u8) -> Self {
        self.config.offset = (x, y);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if the offset pushes the last
    /// column or row past the single-byte address range.
    pub fn build(self) -> Result<Config, BuilderError> {
        let Dimensions { width, height } = self.config.dimensions;
        let (ox, oy) = self.config.offset;
        let longest = width.max(height);
        if ox as u16 + longest > MAX_AXIS || oy as u16 + longest > MAX_AXIS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(self.config)
    }
}
