//! Recording surface for unit tests
//!
//! Logs every native call and every pixel written, without clipping, so
//! tests can check both the call pattern and the resulting pixel set.

use std::vec::Vec;

use wirecube_protocol::AddressWindow;

use crate::color::Rgb565;
use crate::traits::{DisplayError, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Pixel(i32, i32),
    HLine(i32, i32, i32),
    VLine(i32, i32, i32),
    FillRect(i32, i32, i32, i32),
    Block(AddressWindow),
}

pub struct PixelLog {
    width: u16,
    height: u16,
    calls: Vec<Call>,
    writes: Vec<(i32, i32, Rgb565)>,
}

impl PixelLog {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            writes: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Rgb565)> + '_ {
        self.writes.iter().copied()
    }
}

impl Surface for PixelLog {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565) -> Result<(), DisplayError> {
        self.calls.push(Call::Pixel(x, y));
        self.writes.push((x, y, color));
        Ok(())
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb565) -> Result<(), DisplayError> {
        self.calls.push(Call::HLine(x0, x1, y));
        for x in x0.min(x1)..=x0.max(x1) {
            self.writes.push((x, y, color));
        }
        Ok(())
    }

    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgb565) -> Result<(), DisplayError> {
        self.calls.push(Call::VLine(x, y0, y1));
        for y in y0.min(y1)..=y0.max(y1) {
            self.writes.push((x, y, color));
        }
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.calls.push(Call::FillRect(x0, y0, x1, y1));
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.writes.push((x, y, color));
            }
        }
        Ok(())
    }

    fn write_block<I>(&mut self, window: AddressWindow, pixels: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        self.calls.push(Call::Block(window));
        let cells = (0..window.h).flat_map(|row| (0..window.w).map(move |col| (col, row)));
        for ((col, row), color) in cells.zip(pixels) {
            self.writes
                .push((window.x as i32 + col as i32, window.y as i32 + row as i32, color));
        }
        Ok(())
    }
}
