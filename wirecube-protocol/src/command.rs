//! ILI9341 register opcodes
//!
//! Only the registers touched by the driver and its power-on table are
//! listed. Names follow the controller datasheet.

/// Software reset
pub const SWRESET: u8 = 0x01;
/// Sleep out
pub const SLPOUT: u8 = 0x11;
/// Gamma curve select
pub const GAMMASET: u8 = 0x26;
/// Display off
pub const DISPOFF: u8 = 0x28;
/// Display on
pub const DISPON: u8 = 0x29;
/// Column address set
pub const CASET: u8 = 0x2A;
/// Page (row) address set
pub const PASET: u8 = 0x2B;
/// Memory write
pub const RAMWR: u8 = 0x2C;
/// Memory access control (scan direction / orientation)
pub const MADCTL: u8 = 0x36;
/// Pixel format set
pub const COLMOD: u8 = 0x3A;
/// Frame rate control (normal mode)
pub const FRMCTR1: u8 = 0xB1;
/// Display function control
pub const DFUNCTR: u8 = 0xB6;
/// Entry mode set
pub const ETMOD: u8 = 0xB7;
/// Power control 1
pub const PWCTR1: u8 = 0xC0;
/// Power control 2
pub const PWCTR2: u8 = 0xC1;
/// VCOM control 1
pub const VMCTR1: u8 = 0xC5;
/// VCOM control 2
pub const VMCTR2: u8 = 0xC7;
/// Power control A
pub const PWCTRA: u8 = 0xCB;
/// Power control B
pub const PWCTRB: u8 = 0xCF;
/// Positive gamma correction
pub const GMCTRP1: u8 = 0xE0;
/// Negative gamma correction
pub const GMCTRN1: u8 = 0xE1;
/// Driver timing control A
pub const DTCTRA: u8 = 0xE8;
/// Driver timing control B
pub const DTCTRB: u8 = 0xEA;
/// Power-on sequence control
pub const PWRONCTR: u8 = 0xED;
/// Enable 3-gamma
pub const EN3GAM: u8 = 0xF2;
/// Pump ratio control
pub const PUMPCTR: u8 = 0xF7;

/// COLMOD parameter selecting 16 bits per pixel on both interfaces
pub const PIXEL_FORMAT_16BPP: u8 = 0x55;
