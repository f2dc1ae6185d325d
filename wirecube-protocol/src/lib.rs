//! ILI9341 Bus Protocol
//!
//! This crate defines the command/data protocol spoken to the ILI9341 TFT
//! controller. Every exchange is a burst framed by chip-select:
//!
//! ```text
//! ┌─────────┬────────────┬──────────────────────────────┐
//! │ CS low  │ DC low     │ DC high                      │ CS high
//! │         │ opcode 1B  │ parameters / pixel data 0–nB │
//! └─────────┴────────────┴──────────────────────────────┘
//! ```
//!
//! Pixel data is RGB565, most significant byte first. Drawing into a region
//! is a three-burst sequence: column address set, page address set, then a
//! memory write streaming one pixel per cell of the address window.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod init;
pub mod orientation;
pub mod window;

pub use init::{InitCommand, INIT_SEQUENCE};
pub use orientation::Orientation;
pub use window::AddressWindow;

/// Native panel width in pixels (portrait)
pub const NATIVE_WIDTH: u16 = 240;

/// Native panel height in pixels (portrait)
pub const NATIVE_HEIGHT: u16 = 320;
