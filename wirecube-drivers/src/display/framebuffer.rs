//! In-memory RGB565 framebuffer
//!
//! Same clipping rules as the bus driver, with every stored pixel counted,
//! so it can stand in for the panel on the host.

use wirecube_core::traits::clip::{clip_point, clip_rect, clip_window};
use wirecube_core::{DisplayError, Rgb565, Surface};
use wirecube_protocol::AddressWindow;

/// Row-major pixel buffer borrowed from the caller
pub struct Framebuffer<'a> {
    pixels: &'a mut [Rgb565],
    width: u16,
    height: u16,
    writes: usize,
}

impl<'a> Framebuffer<'a> {
    /// Wrap `pixels` as a `width` x `height` surface
    ///
    /// Returns `None` if the buffer holds fewer than `width * height` pixels.
    pub fn new(pixels: &'a mut [Rgb565], width: u16, height: u16) -> Option<Self> {
        if pixels.len() < width as usize * height as usize {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
            writes: 0,
        })
    }

    /// Pixel at `(x, y)`, or `None` off the surface
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        let (x, y) = clip_point(x, y, self.width, self.height)?;
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Fill the whole surface
    pub fn clear(&mut self, color: Rgb565) {
        let len = self.width as usize * self.height as usize;
        self.pixels[..len].fill(color);
        self.writes += len;
    }

    /// Pixels stored since creation or the last [`reset_writes`](Self::reset_writes)
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn reset_writes(&mut self) {
        self.writes = 0;
    }

    /// Surface contents, row-major
    pub fn as_slice(&self) -> &[Rgb565] {
        &self.pixels[..self.width as usize * self.height as usize]
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn store(&mut self, x: u16, y: u16, color: Rgb565) {
        let i = self.index(x, y);
        if let Some(px) = self.pixels.get_mut(i) {
            *px = color;
            self.writes += 1;
        }
    }

    fn fill_window(&mut self, window: AddressWindow, color: Rgb565) {
        for y in window.y..=window.y_end() {
            for x in window.x..=window.x_end() {
                self.store(x, y, color);
            }
        }
    }
}

impl Surface for Framebuffer<'_> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565) -> Result<(), DisplayError> {
        if let Some((x, y)) = clip_point(x, y, self.width, self.height) {
            self.store(x, y, color);
        }
        Ok(())
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb565) -> Result<(), DisplayError> {
        self.fill_rect(x0, y, x1, y, color)
    }

    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgb565) -> Result<(), DisplayError> {
        self.fill_rect(x, y0, x, y1, color)
    }

    fn fill_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        if let Some(window) = clip_rect(x0, y0, x1, y1, self.width, self.height) {
            self.fill_window(window, color);
        }
        Ok(())
    }

    fn write_block<I>(&mut self, window: AddressWindow, pixels: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        if clip_window(window, self.width, self.height).is_none() {
            return Ok(());
        }
        let cells = (0..window.h as i32)
            .flat_map(|row| (0..window.w as i32).map(move |col| (col, row)));
        let pixels = pixels
            .into_iter()
            .chain(core::iter::repeat(Rgb565::BLACK));
        for ((col, row), color) in cells.zip(pixels) {
            self.put_pixel(window.x as i32 + col, window.y as i32 + row, color)?;
        }
        Ok(())
    }
}
