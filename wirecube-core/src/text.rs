//! Text cursor
//!
//! Draws glyphs from a [`Font`] at a cursor that advances proportionally
//! and wraps at the surface edges. Each glyph is one bulk write of its
//! whole cell, foreground where the bitmap is inked and background
//! elsewhere.

use wirecube_protocol::AddressWindow;

use crate::color::Rgb565;
use crate::font::Font;
use crate::traits::{DisplayError, Surface};

/// Lowest code accepted by [`TextCursor::character`]
pub const MIN_CODE: u8 = 31;

/// Highest code accepted by [`TextCursor::character`]
pub const MAX_CODE: u8 = 127;

/// Blank pixels inserted after a glyph's ink
pub const GLYPH_SPACING: u16 = 2;

/// Text position, font and colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCursor<'a> {
    font: Option<Font<'a>>,
    x: u16,
    y: u16,
    foreground: Rgb565,
    background: Rgb565,
}

impl Default for TextCursor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TextCursor<'a> {
    /// Cursor at the origin, white on black, no font
    pub const fn new() -> Self {
        Self {
            font: None,
            x: 0,
            y: 0,
            foreground: Rgb565::WHITE,
            background: Rgb565::BLACK,
        }
    }

    /// Move the cursor
    pub fn locate(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
    }

    /// Current cursor position
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Select the font used by subsequent characters
    pub fn set_font(&mut self, font: Font<'a>) {
        self.font = Some(font);
    }

    /// Currently selected font
    pub const fn font(&self) -> Option<&Font<'a>> {
        self.font.as_ref()
    }

    /// Set ink and cell background colours
    pub fn set_colors(&mut self, foreground: Rgb565, background: Rgb565) {
        self.foreground = foreground;
        self.background = background;
    }

    /// Draw one character at the cursor and advance it
    ///
    /// Codes outside `31..=127`, codes without a glyph record, and calls
    /// made before a font is set are no-ops: nothing is drawn and the
    /// cursor does not move.
    pub fn character<S: Surface>(&mut self, surface: &mut S, code: u8) -> Result<(), DisplayError> {
        if !(MIN_CODE..=MAX_CODE).contains(&code) {
            return Ok(());
        }
        let Some(font) = self.font else {
            return Ok(());
        };
        let Some(glyph) = font.glyph(code) else {
            return Ok(());
        };

        let cell_w = font.cell_width() as u16;
        let cell_h = font.cell_height() as u16;

        if self.x.saturating_add(cell_w) > surface.width() {
            self.x = 0;
            self.y = self.y.saturating_add(cell_h);
            if self.y >= surface.height().saturating_sub(cell_h) {
                self.y = 0;
            }
        }

        let (fg, bg) = (self.foreground, self.background);
        let pixels = (0..font.cell_height()).flat_map(move |row| {
            (0..font.cell_width()).map(move |col| if glyph.is_set(col, row) { fg } else { bg })
        });
        surface.write_block(AddressWindow::new(self.x, self.y, cell_w, cell_h), pixels)?;

        let advance = glyph.ink_width() as u16 + GLYPH_SPACING;
        self.x = self
            .x
            .saturating_add(if advance < cell_w { advance } else { cell_w });
        Ok(())
    }

    /// Move the cursor, then draw one character
    pub fn character_at<S: Surface>(
        &mut self,
        surface: &mut S,
        x: u16,
        y: u16,
        code: u8,
    ) -> Result<(), DisplayError> {
        self.locate(x, y);
        self.character(surface, code)
    }

    /// Draw every byte of `text` in order
    pub fn print<S: Surface>(&mut self, surface: &mut S, text: &str) -> Result<(), DisplayError> {
        for code in text.bytes() {
            self.character(surface, code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::tests::tiny_font_table;
    use crate::testing::{Call, PixelLog};
    use std::vec::Vec;

    #[test]
    fn test_out_of_range_code_is_ignored() {
        let table = tiny_font_table();
        let mut cursor = TextCursor::new();
        cursor.set_font(Font::new(&table).unwrap());
        cursor.locate(12, 34);

        let mut log = PixelLog::new(240, 320);
        cursor.character(&mut log, 200).unwrap();
        cursor.character(&mut log, 10).unwrap();

        assert_eq!(cursor.position(), (12, 34));
        assert!(log.calls().is_empty());
    }

    #[test]
    fn test_no_font_is_ignored() {
        let mut cursor = TextCursor::new();
        let mut log = PixelLog::new(240, 320);
        cursor.character(&mut log, b'A').unwrap();
        assert_eq!(cursor.position(), (0, 0));
        assert!(log.calls().is_empty());
    }

    #[test]
    fn test_glyph_is_one_block_in_row_major_order() {
        let table = tiny_font_table();
        let mut cursor = TextCursor::new();
        cursor.set_font(Font::new(&table).unwrap());
        cursor.set_colors(Rgb565::YELLOW, Rgb565::NAVY);

        let mut log = PixelLog::new(240, 320);
        cursor.character_at(&mut log, 8, 9, b'A').unwrap();

        assert_eq!(log.calls(), &[Call::Block(AddressWindow::new(8, 9, 4, 5))]);
        let colors: Vec<_> = log.pixels().map(|(_, _, c)| c).collect();
        assert_eq!(colors.len(), 20);
        // Row 0: only the middle column of the inverted U is inked
        let (y, n) = (Rgb565::YELLOW, Rgb565::NAVY);
        assert_eq!(&colors[..4], &[n, y, n, n]);
        // Row 1: both legs
        assert_eq!(&colors[4..8], &[y, n, y, n]);
    }

    #[test]
    fn test_advance_is_proportional_up_to_cell_width() {
        let table = tiny_font_table();
        let mut cursor = TextCursor::new();
        cursor.set_font(Font::new(&table).unwrap());
        let mut log = PixelLog::new(240, 320);

        // '!' has ink width 1: 1 + 2 < 4
        cursor.character(&mut log, b'!').unwrap();
        assert_eq!(cursor.position(), (3, 0));

        // 'A' has ink width 3: 3 + 2 >= 4, so a full cell
        cursor.character(&mut log, b'A').unwrap();
        assert_eq!(cursor.position(), (7, 0));
    }

    #[test]
    fn test_wraps_to_next_line_then_to_top() {
        let table = tiny_font_table();
        let mut cursor = TextCursor::new();
        cursor.set_font(Font::new(&table).unwrap());
        let mut log = PixelLog::new(10, 12);

        cursor.print(&mut log, "AA").unwrap();
        assert_eq!(cursor.position(), (8, 0));

        // 8 + 4 > 10: next line
        cursor.character(&mut log, b'A').unwrap();
        assert_eq!(log.calls().last(), Some(&Call::Block(AddressWindow::new(0, 5, 4, 5))));

        // Second wrap lands on y = 10 >= 12 - 5, back to the top
        cursor.locate(8, 5);
        cursor.character(&mut log, b'A').unwrap();
        assert_eq!(log.calls().last(), Some(&Call::Block(AddressWindow::new(0, 0, 4, 5))));
        assert_eq!(cursor.position(), (4, 0));
    }
}
