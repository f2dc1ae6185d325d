//! Panel orientation
//!
//! Orientation selects the controller's row/column scan direction through
//! the MADCTL register. Codes 1 and 3 are landscape and swap the logical
//! width and height.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Logical orientation of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Code 0: 240 wide, 320 tall
    #[default]
    Portrait,
    /// Code 1: 320 wide, 240 tall
    Landscape,
    /// Code 2: portrait, scanned bottom-up
    PortraitFlipped,
    /// Code 3: landscape, rotated 180°
    LandscapeFlipped,
}

impl Orientation {
    /// Map an orientation code (0-3)
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Portrait),
            1 => Some(Self::Landscape),
            2 => Some(Self::PortraitFlipped),
            3 => Some(Self::LandscapeFlipped),
            _ => None,
        }
    }

    /// Orientation code (0-3)
    pub const fn code(self) -> u8 {
        match self {
            Self::Portrait => 0,
            Self::Landscape => 1,
            Self::PortraitFlipped => 2,
            Self::LandscapeFlipped => 3,
        }
    }

    /// MADCTL parameter byte (BGR order always set)
    pub const fn madctl(self) -> u8 {
        match self {
            Self::Portrait => 0x48,
            Self::Landscape => 0x28,
            Self::PortraitFlipped => 0x88,
            Self::LandscapeFlipped => 0xE8,
        }
    }

    /// Whether width and height are swapped relative to the native panel
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape | Self::LandscapeFlipped)
    }

    /// Logical `(width, height)` for a panel with the given native size
    pub const fn dimensions(self, native_width: u16, native_height: u16) -> (u16, u16) {
        if self.is_landscape() {
            (native_height, native_width)
        } else {
            (native_width, native_height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NATIVE_HEIGHT, NATIVE_WIDTH};

    #[test]
    fn test_code_roundtrip() {
        for code in 0..4 {
            let o = Orientation::from_code(code).unwrap();
            assert_eq!(o.code(), code);
        }
        assert_eq!(Orientation::from_code(4), None);
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        assert_eq!(
            Orientation::Portrait.dimensions(NATIVE_WIDTH, NATIVE_HEIGHT),
            (240, 320)
        );
        assert_eq!(
            Orientation::Landscape.dimensions(NATIVE_WIDTH, NATIVE_HEIGHT),
            (320, 240)
        );
        assert_eq!(
            Orientation::PortraitFlipped.dimensions(NATIVE_WIDTH, NATIVE_HEIGHT),
            (240, 320)
        );
        assert_eq!(
            Orientation::LandscapeFlipped.dimensions(NATIVE_WIDTH, NATIVE_HEIGHT),
            (320, 240)
        );
    }

    #[test]
    fn test_madctl_bytes() {
        assert_eq!(Orientation::Portrait.madctl(), 0x48);
        assert_eq!(Orientation::Landscape.madctl(), 0x28);
        assert_eq!(Orientation::PortraitFlipped.madctl(), 0x88);
        assert_eq!(Orientation::LandscapeFlipped.madctl(), 0xE8);
    }
}
