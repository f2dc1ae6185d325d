//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the `Surface` trait
//! defined in wirecube-core:
//!
//! - ILI9341 TFT controller over a 4-wire SPI bus
//! - In-memory RGB565 framebuffer

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
