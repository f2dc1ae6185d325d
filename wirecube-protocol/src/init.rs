//! Power-on register sequence
//!
//! Sent once after the hardware reset pulse. Values are the vendor
//! recommended settings for a 240x320 ILI9341 module in 16-bit SPI mode.

use crate::command as cmd;

/// One register write in the power-on table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitCommand {
    /// Register opcode
    pub cmd: u8,
    /// Parameter bytes
    pub params: &'static [u8],
    /// Delay after the burst in milliseconds
    pub delay_ms: u32,
}

impl InitCommand {
    const fn new(cmd: u8, params: &'static [u8]) -> Self {
        Self {
            cmd,
            params,
            delay_ms: 0,
        }
    }

    const fn with_delay(cmd: u8, params: &'static [u8], delay_ms: u32) -> Self {
        Self {
            cmd,
            params,
            delay_ms,
        }
    }
}

/// Reset pulse low time in microseconds
pub const RESET_PULSE_US: u32 = 50;

/// Time after releasing reset before the first command, in milliseconds
pub const RESET_SETTLE_MS: u32 = 5;

/// Controller bring-up sequence
pub const INIT_SEQUENCE: &[InitCommand] = &[
    InitCommand::with_delay(cmd::SWRESET, &[], 5),
    InitCommand::new(cmd::DISPOFF, &[]),
    InitCommand::new(cmd::PWCTRB, &[0x00, 0x83, 0x30]),
    InitCommand::new(cmd::PWRONCTR, &[0x64, 0x03, 0x12, 0x81]),
    InitCommand::new(cmd::DTCTRA, &[0x85, 0x01, 0x79]),
    InitCommand::new(cmd::PWCTRA, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    InitCommand::new(cmd::PUMPCTR, &[0x20]),
    InitCommand::new(cmd::DTCTRB, &[0x00, 0x00]),
    InitCommand::new(cmd::PWCTR1, &[0x26]),
    InitCommand::new(cmd::PWCTR2, &[0x11]),
    InitCommand::new(cmd::VMCTR1, &[0x35, 0x3E]),
    InitCommand::new(cmd::VMCTR2, &[0xBE]),
    InitCommand::new(cmd::MADCTL, &[0x48]),
    InitCommand::new(cmd::COLMOD, &[cmd::PIXEL_FORMAT_16BPP]),
    InitCommand::new(cmd::FRMCTR1, &[0x00, 0x1B]),
    InitCommand::new(cmd::EN3GAM, &[0x08]),
    InitCommand::new(cmd::GAMMASET, &[0x01]),
    InitCommand::new(
        cmd::GMCTRP1,
        &[
            0x1F, 0x1A, 0x18, 0x0A, 0x0F, 0x06, 0x45, 0x87, 0x32, 0x0A, 0x07, 0x02, 0x07, 0x05,
            0x00,
        ],
    ),
    InitCommand::new(
        cmd::GMCTRN1,
        &[
            0x00, 0x25, 0x27, 0x05, 0x10, 0x09, 0x3A, 0x78, 0x4D, 0x05, 0x18, 0x0D, 0x38, 0x3A,
            0x1F,
        ],
    ),
    InitCommand::new(cmd::ETMOD, &[0x07]),
    InitCommand::new(cmd::DFUNCTR, &[0x0A, 0x82, 0x27, 0x00]),
    InitCommand::with_delay(cmd::SLPOUT, &[], 100),
    InitCommand::with_delay(cmd::DISPON, &[], 100),
];
