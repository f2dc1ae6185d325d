//! Address window encoding
//!
//! The controller fills the active address window row-major, one pixel per
//! 16-bit value written after RAMWR, until the window is full. A window is
//! programmed as two bursts:
//! - CASET: start column, end column (2 bytes each, big-endian)
//! - PASET: start row, end row (2 bytes each, big-endian)
//!
//! End coordinates are inclusive.

/// Rectangular region addressed by subsequent pixel writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    /// Left column
    pub x: u16,
    /// Top row
    pub y: u16,
    /// Width in pixels
    pub w: u16,
    /// Height in pixels
    pub h: u16,
}

impl AddressWindow {
    /// Create a window from origin and size
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Window covering the whole surface
    pub const fn full(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Window spanning the inclusive corners `(x0, y0)`..`(x1, y1)`
    ///
    /// Corners may be given in any order.
    pub fn from_corners(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self::new(left, top, right - left + 1, bottom - top + 1)
    }

    /// Inclusive last column
    pub const fn x_end(&self) -> u16 {
        self.x.saturating_add(self.w.saturating_sub(1))
    }

    /// Inclusive last row
    pub const fn y_end(&self) -> u16 {
        self.y.saturating_add(self.h.saturating_sub(1))
    }

    /// Number of pixels the controller expects before the window is full
    pub const fn pixel_count(&self) -> u32 {
        self.w as u32 * self.h as u32
    }

    /// Check whether the window has no area
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check whether a pixel lies inside the window
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x <= self.x_end() && y >= self.y && y <= self.y_end()
    }

    /// CASET parameters: `[x>>8, x, x_end>>8, x_end]`
    pub const fn column_bytes(&self) -> [u8; 4] {
        span_bytes(self.x, self.x_end())
    }

    /// PASET parameters: `[y>>8, y, y_end>>8, y_end]`
    pub const fn page_bytes(&self) -> [u8; 4] {
        span_bytes(self.y, self.y_end())
    }

    /// CASET parameters followed by PASET parameters
    pub fn encode(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&self.column_bytes());
        out[4..].copy_from_slice(&self.page_bytes());
        out
    }
}

/// Start-only CASET parameters for a single-pixel write
///
/// The end column is left at whatever the last full window programmed.
pub const fn start_column_bytes(x: u16) -> [u8; 2] {
    x.to_be_bytes()
}

/// Start-only PASET parameters for a single-pixel write
pub const fn start_page_bytes(y: u16) -> [u8; 2] {
    y.to_be_bytes()
}

const fn span_bytes(start: u16, end: u16) -> [u8; 4] {
    let s = start.to_be_bytes();
    let e = end.to_be_bytes();
    [s[0], s[1], e[0], e[1]]
}
