//! Bitmap font tables
//!
//! Table layout:
//! - header: `[bytes_per_char, cell_width, cell_height, bytes_per_column]`
//! - one `bytes_per_char` record per code 32..=127
//!
//! Each record starts with the glyph's ink width, followed by the bitmap
//! stored column by column, 1 bit per pixel, 8 rows per byte with the top
//! row in bit 0.

/// First code with a record in the table
pub const FIRST_CHAR: u8 = 32;

/// Last code with a record in the table
pub const LAST_CHAR: u8 = 127;

/// Header size in bytes
pub const HEADER_LEN: usize = 4;

/// Errors that can occur when loading a font table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Table shorter than its header
    TooShort,
    /// Header values are zero or inconsistent with each other
    InvalidHeader,
}

/// Font table borrowed from flash or RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    data: &'a [u8],
    bytes_per_char: u8,
    cell_width: u8,
    cell_height: u8,
    bytes_per_column: u8,
}

impl<'a> Font<'a> {
    /// Wrap a font table, validating its header
    pub fn new(data: &'a [u8]) -> Result<Self, FontError> {
        if data.len() < HEADER_LEN {
            return Err(FontError::TooShort);
        }
        let [bytes_per_char, cell_width, cell_height, bytes_per_column] =
            [data[0], data[1], data[2], data[3]];

        if bytes_per_char == 0 || cell_width == 0 || cell_height == 0 || bytes_per_column == 0 {
            return Err(FontError::InvalidHeader);
        }
        // Ink byte plus one column of bitmap per cell column
        let record_len = 1 + cell_width as usize * bytes_per_column as usize;
        if record_len > bytes_per_char as usize {
            return Err(FontError::InvalidHeader);
        }
        if bytes_per_column as usize * 8 < cell_height as usize {
            return Err(FontError::InvalidHeader);
        }

        Ok(Self {
            data,
            bytes_per_char,
            cell_width,
            cell_height,
            bytes_per_column,
        })
    }

    /// Cell width in pixels
    pub const fn cell_width(&self) -> u8 {
        self.cell_width
    }

    /// Cell height in pixels
    pub const fn cell_height(&self) -> u8 {
        self.cell_height
    }

    /// Glyph record for a character code
    ///
    /// Returns `None` for codes without a record, including records cut off
    /// by a truncated table.
    pub fn glyph(&self, code: u8) -> Option<Glyph<'a>> {
        if !(FIRST_CHAR..=LAST_CHAR).contains(&code) {
            return None;
        }
        let start = HEADER_LEN + (code - FIRST_CHAR) as usize * self.bytes_per_char as usize;
        let record = self.data.get(start..start + self.bytes_per_char as usize)?;
        Some(Glyph {
            record,
            bytes_per_column: self.bytes_per_column,
        })
    }
}

/// One character's bitmap record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    record: &'a [u8],
    bytes_per_column: u8,
}

impl Glyph<'_> {
    /// Width of the inked part of the glyph, used for proportional advance
    pub fn ink_width(&self) -> u8 {
        self.record[0]
    }

    /// Whether the pixel at `(col, row)` of the cell is inked
    pub fn is_set(&self, col: u8, row: u8) -> bool {
        let index = 1 + self.bytes_per_column as usize * col as usize + (row >> 3) as usize;
        self.record
            .get(index)
            .is_some_and(|byte| byte & (1 << (row & 0x07)) != 0)
    }
}
