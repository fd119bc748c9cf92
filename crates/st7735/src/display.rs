//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{
    CASET, COLMOD, DISPOFF, DISPON, FRMCTR1, FRMCTR2, FRMCTR3, GMCTRN1, GMCTRP1, INVCTR, INVOFF,
    INVON, MADCTL, NORON, PWCTR1, PWCTR2, PWCTR3, PWCTR4, PWCTR5, RAMWR, RASET, SLPIN, SLPOUT,
    SWRESET, VMCTR1, VSCRDEF, VSCSAD,
};
use crate::config::{ColorOrder, Config, Dimensions, Rotation};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::variant::{NormalModeOrder, Variant};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Bytes per pixel in the 16-bit (RGB565) interface format
pub const BYTES_PER_PIXEL: usize = 2;

// Fastest refresh, 6 lines front porch, 3 lines back porch
const FRAME_RATE: [u8; 3] = [0x01, 0x2C, 0x2D];
// Dot inversion mode, then line inversion mode
const FRAME_RATE_PARTIAL: [u8; 6] = [0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D];

const SWRESET_SETTLE_US: u32 = 150;
const FRAME_RATE_SETTLE_US: u32 = 10;
const NORMAL_MODE_SETTLE_US: u32 = 10;
const DISPLAY_ON_SETTLE_US: u32 = 100;
// Used by `sleep` before a variant is known
const DEFAULT_SLEEP_OUT_SETTLE_US: u32 = 500;

const FILL_CHUNK_PIXELS: usize = 32;

/// Column and row bounds of the controller's write window, inclusive,
/// without the panel offset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    /// First column
    pub x0: u16,
    /// First row
    pub y0: u16,
    /// Last column
    pub x1: u16,
    /// Last row
    pub y1: u16,
}

impl Window {
    /// Number of pixels covered by the window, zero if it is inverted
    pub fn pixel_count(&self) -> usize {
        if self.x0 > self.x1 || self.y0 > self.y1 {
            return 0;
        }
        let columns = (self.x1 - self.x0) as usize + 1;
        let rows = (self.y1 - self.y0) as usize + 1;
        columns * rows
    }
}

/// Fixed areas of the vertical scrolling region, in lines
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollArea {
    /// Lines fixed at the top of frame memory
    pub top: u16,
    /// Lines fixed at the bottom of frame memory
    pub bottom: u16,
}

/// Core display driver for the ST7735
///
/// Owns the interface and tracks the geometry, rotation and color order that
/// the controller has been programmed with. Every method is a blocking sequence
/// of bus transactions; nothing is buffered between calls.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Width for the current rotation
    width: u16,
    /// Height for the current rotation
    height: u16,
    rotation: Rotation,
    color_order: ColorOrder,
    /// Column and row address bias
    offset: (u8, u8),
    /// Last programmed window
    window: Window,
    /// Revision given to the last successful `initialize`
    variant: Option<Variant>,
    scroll: ScrollArea,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the controller until [`reset`](Self::reset) or
    /// [`initialize`](Self::initialize) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            width: config.dimensions.width,
            height: config.dimensions.height,
            rotation: config.rotation,
            color_order: config.color_order,
            offset: config.offset,
            window: Window::default(),
            variant: None,
            scroll: ScrollArea::default(),
        }
    }

    /// Pulse the hardware reset line
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("st7735: hardware reset");
        self.interface.hard_reset(delay).map_err(Error::Interface)
    }

    /// Bring the controller from reset into 16-bit color, display on
    ///
    /// Runs the hardware reset, software reset and sleep-out, the panel
    /// configuration registers, a full-screen window and the gamma tables of
    /// `variant`, then switches the display on. The sequence is not read back;
    /// a wrong variant only shows as a wrong picture.
    pub fn initialize<D: DelayNs>(&mut self, variant: Variant, delay: &mut D) -> DisplayResult<I> {
        let tables = variant.tables();
        log::debug!("st7735: initializing {} tab panel", variant.tab());

        self.reset(delay)?;

        self.send_command(SWRESET)?;
        delay.delay_us(SWRESET_SETTLE_US);
        self.send_command(SLPOUT)?;
        // Charge pump settle time differs per revision
        delay.delay_us(tables.sleep_out_settle_us);

        self.command_with_data(FRMCTR1, &FRAME_RATE)?;
        self.command_with_data(FRMCTR2, &FRAME_RATE)?;
        self.command_with_data(FRMCTR3, &FRAME_RATE_PARTIAL)?;
        delay.delay_us(FRAME_RATE_SETTLE_US);

        // Line inversion
        self.command_with_data(INVCTR, &[0x07])?;

        self.command_with_data(PWCTR1, &[0xA2, 0x02, 0x84])?;
        // VGH = 14.7V, VGL = -7.35V
        self.command_with_data(PWCTR2, &[0xC5])?;
        // Opamp current small, boost frequency
        self.command_with_data(PWCTR3, &[0x0A, 0x00])?;
        self.command_with_data(PWCTR4, &[0x8A, 0x2A])?;
        self.command_with_data(PWCTR5, &[0x8A, 0xEE])?;
        self.command_with_data(VMCTR1, &[0x0E])?;

        self.send_command(INVOFF)?;

        self.send_command(MADCTL)?;
        if let Some(madctl) = tables.init_madctl {
            self.send_data(&[madctl])?;
        }

        // 16 bits per pixel
        self.command_with_data(COLMOD, &[0x05])?;

        let start = tables.window_start;
        let last_col = (self.width - 1) as u8;
        let last_row = (self.height - 1) as u8;
        self.command_with_data(CASET, &[0x00, start, 0x00, last_col])?;
        self.command_with_data(RASET, &[0x00, start, 0x00, last_row])?;
        self.window = Window {
            x0: start as u16,
            y0: start as u16,
            x1: last_col as u16,
            y1: last_row as u16,
        };

        self.command_with_data(GMCTRP1, &tables.gamma_positive)?;
        self.command_with_data(GMCTRN1, &tables.gamma_negative)?;

        match tables.normal_mode {
            NormalModeOrder::BeforeDisplayOn => {
                self.send_command(NORON)?;
                delay.delay_us(NORMAL_MODE_SETTLE_US);
                self.send_command(DISPON)?;
                delay.delay_us(DISPLAY_ON_SETTLE_US);
            }
            NormalModeOrder::AfterDisplayOn => {
                delay.delay_us(NORMAL_MODE_SETTLE_US);
                self.send_command(DISPON)?;
                delay.delay_us(DISPLAY_ON_SETTLE_US);
                self.send_command(NORON)?;
                delay.delay_us(NORMAL_MODE_SETTLE_US);
            }
        }

        self.interface
            .release_chip_select()
            .map_err(Error::Interface)?;

        self.variant = Some(variant);
        log::debug!("st7735: {}x{} panel ready", self.width, self.height);
        Ok(())
    }

    /// Initialize from a tab letter ("R" or "G")
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedVariant`] for any other letter, without
    /// touching the bus.
    pub fn initialize_tab<D: DelayNs>(&mut self, tab: &str, delay: &mut D) -> DisplayResult<I> {
        match Variant::from_tab(tab) {
            Some(variant) => self.initialize(variant, delay),
            None => {
                log::warn!("st7735: unsupported tab {tab:?}, nothing sent");
                Err(Error::UnsupportedVariant)
            }
        }
    }

    /// Rotate the display
    ///
    /// When the rotation moves between portrait and landscape the width and
    /// height are swapped. MADCTL is rewritten with the new rotation and the
    /// current color order.
    pub fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        if self.rotation.swaps_axes(rotation) {
            core::mem::swap(&mut self.width, &mut self.height);
        }
        self.rotation = rotation;
        log::debug!(
            "st7735: rotation {} ({}x{})",
            rotation.steps(),
            self.width,
            self.height
        );
        self.write_madctl()
    }

    /// Rotate the display by clockwise step count
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRotation`] for values above 3. Neither the state
    /// nor the controller is changed.
    pub fn set_rotation_index(&mut self, steps: u8) -> DisplayResult<I> {
        match Rotation::try_from(steps) {
            Ok(rotation) => self.set_rotation(rotation),
            Err(value) => {
                log::warn!("st7735: rotation {value} out of range, ignored");
                Err(Error::InvalidRotation(value))
            }
        }
    }

    /// Switch between RGB and BGR color filter order
    pub fn set_color_order(&mut self, order: ColorOrder) -> DisplayResult<I> {
        self.color_order = order;
        self.write_madctl()
    }

    /// Turn the display output on or off
    pub fn power(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { DISPON } else { DISPOFF })
    }

    /// Invert all colors on the panel
    pub fn invert(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { INVON } else { INVOFF })
    }

    /// Enter or leave sleep mode
    ///
    /// Leaving sleep waits for the same settle time as initialization.
    pub fn sleep<D: DelayNs>(&mut self, enter: bool, delay: &mut D) -> DisplayResult<I> {
        if enter {
            return self.send_command(SLPIN);
        }
        self.send_command(SLPOUT)?;
        let settle = self
            .variant
            .map_or(DEFAULT_SLEEP_OUT_SETTLE_US, |v| v.tables().sleep_out_settle_us);
        delay.delay_us(settle);
        Ok(())
    }

    /// Select the region that following pixel writes fill
    ///
    /// Coordinates are inclusive and relative to the current rotation. Sends
    /// CASET and RASET (each `[offset, offset + start, offset, offset + end]`),
    /// then opens the pixel stream with RAMWR.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] before any bus traffic if the window is
    /// inverted, leaves the display, or overflows the address byte.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        let window = Window { x0, y0, x1, y1 };
        let (columns, rows) = self.address_bytes(&window)?;

        self.command_with_data(CASET, &columns)?;
        self.command_with_data(RASET, &rows)?;
        self.send_command(RAMWR)?;

        self.window = window;
        Ok(())
    }

    /// Write a block of pixels
    ///
    /// `pixels` holds the region row by row, two bytes per pixel, big-endian
    /// RGB565, and is sent unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] or [`Error::PixelCountMismatch`] before
    /// any bus traffic.
    pub fn blit(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        pixels: &[u8],
    ) -> DisplayResult<I> {
        let window = Window { x0, y0, x1, y1 };
        self.address_bytes(&window)?;

        let expected = window.pixel_count() * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            log::warn!("st7735: blit needs {expected} bytes, got {}", pixels.len());
            return Err(Error::PixelCountMismatch {
                expected,
                provided: pixels.len(),
            });
        }

        self.set_window(x0, y0, x1, y1)?;
        self.send_data(pixels)
    }

    /// Continue streaming pixel bytes into the current window
    ///
    /// The controller advances its address counter on its own; no length check
    /// is done.
    pub fn write_pixels(&mut self, pixels: &[u8]) -> DisplayResult<I> {
        self.send_data(pixels)
    }

    /// Fill a region with one RGB565 color
    pub fn fill_rect(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: u16,
    ) -> DisplayResult<I> {
        self.set_window(x0, y0, x1, y1)?;

        let mut chunk = [0u8; FILL_CHUNK_PIXELS * BYTES_PER_PIXEL];
        for pixel in chunk.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&color.to_be_bytes());
        }

        let mut remaining = self.window.pixel_count();
        while remaining > 0 {
            let count = remaining.min(FILL_CHUNK_PIXELS);
            self.send_data(&chunk[..count * BYTES_PER_PIXEL])?;
            remaining -= count;
        }
        Ok(())
    }

    /// Define the vertical scrolling area
    ///
    /// `top` and `bottom` lines of frame memory stay fixed; the lines between
    /// them scroll. Lines are counted along the panel's native (unrotated) height.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScrollArea`] if the fixed areas do not fit.
    pub fn set_scroll_area(&mut self, top: u16, bottom: u16) -> DisplayResult<I> {
        let height = self.native_height();
        let Some(scrolling) = height
            .checked_sub(top)
            .and_then(|rest| rest.checked_sub(bottom))
        else {
            log::warn!("st7735: scroll area top {top} bottom {bottom} exceeds {height} lines");
            return Err(Error::InvalidScrollArea { top, bottom });
        };

        let [top_hi, top_lo] = top.to_be_bytes();
        let [mid_hi, mid_lo] = scrolling.to_be_bytes();
        let [bottom_hi, bottom_lo] = bottom.to_be_bytes();
        self.command_with_data(
            VSCRDEF,
            &[top_hi, top_lo, mid_hi, mid_lo, bottom_hi, bottom_lo],
        )?;

        self.scroll = ScrollArea { top, bottom };
        Ok(())
    }

    /// Set the frame memory line shown at the top of the scrolling area
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScrollArea`] if `line` lies in a fixed area.
    pub fn scroll_to(&mut self, line: u16) -> DisplayResult<I> {
        let ScrollArea { top, bottom } = self.scroll;
        if line < top || line >= self.native_height() - bottom {
            log::warn!("st7735: scroll line {line} outside scrolling area");
            return Err(Error::InvalidScrollArea { top, bottom });
        }
        self.command_with_data(VSCSAD, &line.to_be_bytes())
    }

    /// Get display dimensions for the current rotation
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Width for the current rotation
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height for the current rotation
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Get color order
    pub fn color_order(&self) -> ColorOrder {
        self.color_order
    }

    /// Column and row address offset
    pub fn offset(&self) -> (u8, u8) {
        self.offset
    }

    /// Last programmed window
    pub fn window(&self) -> Window {
        self.window
    }

    /// Revision the display was initialized with
    pub fn variant(&self) -> Option<Variant> {
        self.variant
    }

    /// Current vertical scroll fixed areas
    pub fn scroll_area(&self) -> ScrollArea {
        self.scroll
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn native_height(&self) -> u16 {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.height,
            Rotation::Rotate90 | Rotation::Rotate270 => self.width,
        }
    }

    /// CASET and RASET parameters for `window`, or an error if it cannot be addressed
    fn address_bytes(&self, window: &Window) -> Result<([u8; 4], [u8; 4]), Error<I>> {
        let Window { x0, y0, x1, y1 } = *window;
        let (ox, oy) = self.offset;
        let bytes = if x0 <= x1 && y0 <= y1 && x1 < self.width && y1 < self.height {
            axis_bytes(ox, x0, x1).zip(axis_bytes(oy, y0, y1))
        } else {
            None
        };
        bytes.ok_or_else(|| {
            log::warn!("st7735: window ({x0}, {y0})-({x1}, {y1}) rejected");
            Error::InvalidWindow { x0, y0, x1, y1 }
        })
    }

    fn write_madctl(&mut self) -> DisplayResult<I> {
        let value = self.rotation.madctl_bits() | self.color_order.madctl_bit();
        self.command_with_data(MADCTL, &[value])
    }

    fn command_with_data(&mut self, cmd: u8, data: &[u8]) -> DisplayResult<I> {
        self.send_command(cmd)?;
        self.send_data(data)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

/// `[offset, offset + start, offset, offset + end]`, if both fit in a byte
fn axis_bytes(offset: u8, start: u16, end: u16) -> Option<[u8; 4]> {
    let start = u8::try_from(start).ok()?.checked_add(offset)?;
    let end = u8::try_from(end).ok()?.checked_add(offset)?;
    Some([offset, start, offset, end])
}
