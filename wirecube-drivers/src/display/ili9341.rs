//! ILI9341 TFT driver
//!
//! 4-wire SPI: every register write is one burst framed by CS, with DC low
//! for the opcode byte and high for the parameter/pixel bytes.
//!
//! Bounded operations (spans, rectangles, blocks, glyphs) program a
//! CASET/PASET window sized to the clipped region, stream exactly
//! `w * h` pixels after RAMWR, then put the window back to the full
//! surface. Single pixels only move the window start, so the end stays at
//! the full-surface value and nothing has to be restored.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use heapless::Vec;

use wirecube_core::traits::clip::{clip_point, clip_rect, clip_span, clip_window};
use wirecube_core::{DisplayError, Font, Rgb565, Surface, TextCursor};
use wirecube_protocol::command as cmd;
use wirecube_protocol::init::{RESET_PULSE_US, RESET_SETTLE_MS};
use wirecube_protocol::window::{start_column_bytes, start_page_bytes};
use wirecube_protocol::{AddressWindow, Orientation, INIT_SEQUENCE, NATIVE_HEIGHT, NATIVE_WIDTH};

/// Pixel bytes buffered before each bus write
const CHUNK_BYTES: usize = 64;

/// ILI9341 on an SPI bus with DC, CS and RST lines
pub struct Ili9341<'a, SPI, DC, CS, RST> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    orientation: Orientation,
    width: u16,
    height: u16,
    /// Last window programmed on the controller
    window: AddressWindow,
    text: TextCursor<'a>,
}

impl<'a, SPI, DC, CS, RST> Ili9341<'a, SPI, DC, CS, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    /// Wrap the bus and control pins
    ///
    /// Nothing is transmitted until [`init`](Self::init).
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        let orientation = Orientation::default();
        let (width, height) = orientation.dimensions(NATIVE_WIDTH, NATIVE_HEIGHT);
        Self {
            spi,
            dc,
            cs,
            rst,
            orientation,
            width,
            height,
            window: AddressWindow::full(width, height),
            text: TextCursor::new(),
        }
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, DC, CS, RST) {
        (self.spi, self.dc, self.cs, self.rst)
    }

    /// Hardware reset, power-on register table, full-surface window
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::Pin)?;
        self.rst.set_low().map_err(|_| DisplayError::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_high().map_err(|_| DisplayError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);

        for step in INIT_SEQUENCE {
            self.command(step.cmd, step.params)?;
            if step.delay_ms > 0 {
                delay.delay_ms(step.delay_ms);
            }
        }

        // The power-on table leaves the panel in native portrait scan order
        self.orientation = Orientation::Portrait;
        let (width, height) = self.orientation.dimensions(NATIVE_WIDTH, NATIVE_HEIGHT);
        self.width = width;
        self.height = height;
        self.reset_window()
    }

    /// Select scan direction; landscape orientations swap width and height
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DisplayError> {
        self.command(cmd::MADCTL, &[orientation.madctl()])?;
        self.orientation = orientation;
        let (width, height) = orientation.dimensions(NATIVE_WIDTH, NATIVE_HEIGHT);
        self.width = width;
        self.height = height;
        self.reset_window()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Window the controller is currently addressing
    pub fn address_window(&self) -> AddressWindow {
        self.window
    }

    /// Turn the panel output on or off without touching GRAM
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.command(if on { cmd::DISPON } else { cmd::DISPOFF }, &[])
    }

    /// Fill the whole surface
    pub fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        let window = AddressWindow::full(self.width, self.height);
        self.fill_window(window, color)
    }

    /// Move the text cursor
    pub fn locate(&mut self, x: u16, y: u16) {
        self.text.locate(x, y);
    }

    /// Text cursor position
    pub fn cursor(&self) -> (u16, u16) {
        self.text.position()
    }

    pub fn set_font(&mut self, font: Font<'a>) {
        self.text.set_font(font);
    }

    pub fn set_text_colors(&mut self, foreground: Rgb565, background: Rgb565) {
        self.text.set_colors(foreground, background);
    }

    /// Draw one character at the text cursor
    pub fn character(&mut self, code: u8) -> Result<(), DisplayError> {
        let mut text = self.text;
        let result = text.character(self, code);
        self.text = text;
        result
    }

    /// Move the text cursor, then draw one character
    pub fn character_at(&mut self, x: u16, y: u16, code: u8) -> Result<(), DisplayError> {
        self.locate(x, y);
        self.character(code)
    }

    /// Draw a string at the text cursor
    pub fn print(&mut self, s: &str) -> Result<(), DisplayError> {
        let mut text = self.text;
        let result = text.print(self, s);
        self.text = text;
        result
    }

    /// One register burst: opcode with DC low, parameters with DC high
    fn command(&mut self, opcode: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.begin(opcode)?;
        if !params.is_empty() {
            self.spi.write(params).map_err(|_| DisplayError::Bus)?;
        }
        self.end()
    }

    /// Assert CS, clock out `opcode` as a command, leave DC in data mode
    fn begin(&mut self, opcode: u8) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::Pin)?;
        self.dc.set_low().map_err(|_| DisplayError::Pin)?;
        self.spi.write(&[opcode]).map_err(|_| DisplayError::Bus)?;
        // DC must not change until the opcode has left the shifter
        self.spi.flush().map_err(|_| DisplayError::Bus)?;
        self.dc.set_high().map_err(|_| DisplayError::Pin)
    }

    fn end(&mut self) -> Result<(), DisplayError> {
        self.spi.flush().map_err(|_| DisplayError::Bus)?;
        self.cs.set_high().map_err(|_| DisplayError::Pin)
    }

    /// RAMWR followed by the pixels, MSB first, in one CS frame
    fn write_pixels<I>(&mut self, pixels: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        self.begin(cmd::RAMWR)?;
        let mut chunk: Vec<u8, CHUNK_BYTES> = Vec::new();
        for pixel in pixels {
            if chunk.extend_from_slice(&pixel.to_be_bytes()).is_err() {
                self.spi.write(&chunk).map_err(|_| DisplayError::Bus)?;
                chunk.clear();
                chunk
                    .extend_from_slice(&pixel.to_be_bytes())
                    .map_err(|_| DisplayError::Bus)?;
            }
        }
        if !chunk.is_empty() {
            self.spi.write(&chunk).map_err(|_| DisplayError::Bus)?;
        }
        self.end()
    }

    fn set_window(&mut self, window: AddressWindow) -> Result<(), DisplayError> {
        self.command(cmd::CASET, &window.column_bytes())?;
        self.command(cmd::PASET, &window.page_bytes())?;
        self.window = window;
        Ok(())
    }

    fn reset_window(&mut self) -> Result<(), DisplayError> {
        self.set_window(AddressWindow::full(self.width, self.height))
    }

    /// Program `window`, stream `pixels` into it, restore the full window
    fn bounded_write<I>(&mut self, window: AddressWindow, pixels: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        self.set_window(window)?;
        self.write_pixels(pixels)?;
        self.reset_window()
    }

    fn fill_window(&mut self, window: AddressWindow, color: Rgb565) -> Result<(), DisplayError> {
        let count = window.pixel_count() as usize;
        self.bounded_write(window, core::iter::repeat(color).take(count))
    }
}

impl<SPI, DC, CS, RST> Surface for Ili9341<'_, SPI, DC, CS, RST>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565) -> Result<(), DisplayError> {
        let Some((x, y)) = clip_point(x, y, self.width, self.height) else {
            return Ok(());
        };
        self.command(cmd::CASET, &start_column_bytes(x))?;
        self.command(cmd::PASET, &start_page_bytes(y))?;
        self.window = AddressWindow::from_corners(x, y, self.width - 1, self.height - 1);
        self.write_pixels(core::iter::once(color))
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb565) -> Result<(), DisplayError> {
        if y < 0 || y >= self.height as i32 {
            return Ok(());
        }
        let Some((left, right)) = clip_span(x0, x1, self.width) else {
            return Ok(());
        };
        let y = y as u16;
        self.fill_window(AddressWindow::from_corners(left, y, right, y), color)
    }

    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgb565) -> Result<(), DisplayError> {
        if x < 0 || x >= self.width as i32 {
            return Ok(());
        }
        let Some((top, bottom)) = clip_span(y0, y1, self.height) else {
            return Ok(());
        };
        let x = x as u16;
        self.fill_window(AddressWindow::from_corners(x, top, x, bottom), color)
    }

    fn fill_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        match clip_rect(x0, y0, x1, y1, self.width, self.height) {
            Some(window) => self.fill_window(window, color),
            None => Ok(()),
        }
    }

    fn write_block<I>(&mut self, window: AddressWindow, pixels: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        let Some(visible) = clip_window(window, self.width, self.height) else {
            return Ok(());
        };
        // The controller window must receive exactly w * h pixels
        let pixels = pixels
            .into_iter()
            .chain(core::iter::repeat(Rgb565::BLACK));
        if visible == window {
            let count = window.pixel_count() as usize;
            return self.bounded_write(window, pixels.take(count));
        }

        // Partially visible: keep only the pixels that land inside `visible`
        let cells = (0..window.h as u32)
            .flat_map(move |row| (0..window.w as u32).map(move |col| (col, row)));
        let kept = cells.zip(pixels).filter_map(move |((col, row), color)| {
            let x = window.x as u32 + col;
            let y = window.y as u32 + row;
            let inside = x >= visible.x as u32
                && x <= visible.x_end() as u32
                && y >= visible.y as u32
                && y <= visible.y_end() as u32;
            inside.then_some(color)
        });
        self.bounded_write(visible, kept)
    }
}
