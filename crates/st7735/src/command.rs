// ST7735 command definitions

// System
pub const NOP: u8 = 0x00; // No operation
pub const SWRESET: u8 = 0x01; // Software reset
pub const SLPIN: u8 = 0x10; // Sleep in
pub const SLPOUT: u8 = 0x11; // Sleep out
pub const NORON: u8 = 0x13; // Normal display mode on

// Display mode
pub const INVOFF: u8 = 0x20; // Display inversion off
pub const INVON: u8 = 0x21; // Display inversion on
pub const DISPOFF: u8 = 0x28; // Display off
pub const DISPON: u8 = 0x29; // Display on

// Addressing and memory
pub const CASET: u8 = 0x2A; // Column address set
pub const RASET: u8 = 0x2B; // Row address set
pub const RAMWR: u8 = 0x2C; // Memory write
pub const VSCRDEF: u8 = 0x33; // Vertical scrolling definition
pub const MADCTL: u8 = 0x36; // Memory data access control
pub const VSCSAD: u8 = 0x37; // Vertical scroll start address
pub const COLMOD: u8 = 0x3A; // Interface pixel format

// Panel function
pub const FRMCTR1: u8 = 0xB1; // Frame rate control, normal mode
pub const FRMCTR2: u8 = 0xB2; // Frame rate control, idle mode
pub const FRMCTR3: u8 = 0xB3; // Frame rate control, partial mode
pub const INVCTR: u8 = 0xB4; // Display inversion control

// Power
pub const PWCTR1: u8 = 0xC0; // Power control 1
pub const PWCTR2: u8 = 0xC1; // Power control 2
pub const PWCTR3: u8 = 0xC2; // Power control 3, normal mode
pub const PWCTR4: u8 = 0xC3; // Power control 4, idle mode
pub const PWCTR5: u8 = 0xC4; // Power control 5, partial mode
pub const VMCTR1: u8 = 0xC5; // VCOM control 1

// Gamma
pub const GMCTRP1: u8 = 0xE0; // Positive gamma correction
pub const GMCTRN1: u8 = 0xE1; // Negative gamma correction

// MADCTL parameter bits
pub const MADCTL_RGB: u8 = 0x00; // RGB color filter order
pub const MADCTL_BGR: u8 = 0x08; // BGR color filter order

/// MADCTL row/column exchange bits per clockwise rotation step, looking at the
/// panel with the connector on top
///
/// 0x00 upper left printing right, 0x60 rotated 90, 0xC0 rotated 180, 0xA0 rotated 270.
pub const ROTATION_TABLE: [u8; 4] = [0x00, 0x60, 0xC0, 0xA0];
