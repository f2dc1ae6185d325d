//! Display surface capability
//!
//! `Surface` is the set of operations a backend must provide natively: the
//! ones that map onto a single address-window write on the controller.
//! Everything built from them (lines, outlines, circles) lives in
//! `SurfaceExt` and is shared by every backend.

use wirecube_protocol::AddressWindow;

use crate::color::Rgb565;

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer failed
    Bus,
    /// Control pin (DC, CS, RST) could not be driven
    Pin,
}

/// Drawable pixel surface
///
/// Coordinates are signed and may fall outside the surface; implementations
/// clip, so off-surface pixels are never transmitted. Spans and corners may
/// be given in either order.
pub trait Surface {
    /// Logical width in pixels (orientation-aware)
    fn width(&self) -> u16;

    /// Logical height in pixels (orientation-aware)
    fn height(&self) -> u16;

    /// Set a single pixel
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565) -> Result<(), DisplayError>;

    /// Horizontal run from `x0` to `x1` inclusive, as one bulk write
    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb565) -> Result<(), DisplayError>;

    /// Vertical run from `y0` to `y1` inclusive, as one bulk write
    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgb565) -> Result<(), DisplayError>;

    /// Solid rectangle with inclusive corners, as one bulk write
    fn fill_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError>;

    /// Stream `window.w * window.h` pixels row-major into `window`
    ///
    /// Pixels falling outside the surface are consumed and discarded. A
    /// short iterator is padded with black so the window is always filled.
    fn write_block<I>(&mut self, window: AddressWindow, pixels: I) -> Result<(), DisplayError>
    where
        I: IntoIterator<Item = Rgb565>;
}

/// Rasterizers built on the native `Surface` operations
pub trait SurfaceExt: Surface {
    /// Bresenham line from `(x0, y0)` to `(x1, y1)` inclusive
    ///
    /// Axis-aligned segments become a single `vline`/`hline`. Otherwise one
    /// `put_pixel` per step along the major axis. The major axis is always
    /// walked in the positive direction so both endpoint orders plot the
    /// same pixels.
    fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        if x0 == x1 {
            return self.vline(x0, y0.min(y1), y0.max(y1), color);
        }
        if y0 == y1 {
            return self.hline(x0.min(x1), x0.max(x1), y0, color);
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        if dx >= dy {
            let ((mut x, mut y), (x_end, y_end)) = if x0 < x1 {
                ((x0, y0), (x1, y1))
            } else {
                ((x1, y1), (x0, y0))
            };
            let sy = if y_end > y { 1 } else { -1 };
            let mut di = 2 * dy - dx;
            while x != x_end {
                self.put_pixel(x, y, color)?;
                x += 1;
                if di < 0 {
                    di += 2 * dy;
                } else {
                    di += 2 * dy - 2 * dx;
                    y += sy;
                }
            }
            self.put_pixel(x, y, color)
        } else {
            let ((mut x, mut y), (x_end, y_end)) = if y0 < y1 {
                ((x0, y0), (x1, y1))
            } else {
                ((x1, y1), (x0, y0))
            };
            let sx = if x_end > x { 1 } else { -1 };
            let mut di = 2 * dx - dy;
            while y != y_end {
                self.put_pixel(x, y, color)?;
                y += 1;
                if di < 0 {
                    di += 2 * dx;
                } else {
                    di += 2 * dx - 2 * dy;
                    x += sx;
                }
            }
            self.put_pixel(x, y, color)
        }
    }

    /// Rectangle outline with inclusive corners
    fn rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));

        self.hline(left, right, y0, color)?;
        self.vline(x0, top, bottom, color)?;
        self.hline(left, right, y1, color)?;
        self.vline(x1, top, bottom, color)
    }

    /// Midpoint circle outline of radius `r` centred on `(x0, y0)`
    fn circle(&mut self, x0: i32, y0: i32, r: i32, color: Rgb565) -> Result<(), DisplayError> {
        for (x, y) in CircleWalk::new(r) {
            self.put_pixel(x0 - x, y0 + y, color)?;
            self.put_pixel(x0 + x, y0 + y, color)?;
            self.put_pixel(x0 + x, y0 - y, color)?;
            self.put_pixel(x0 - x, y0 - y, color)?;
        }
        Ok(())
    }

    /// Filled disc of radius `r` centred on `(x0, y0)`
    ///
    /// One vertical span per column, each pixel written once. The walk's
    /// `y` only grows, so a column's span is emitted on the last step
    /// before `x` moves on; the centre column (`x == 0`) is not mirrored.
    fn fill_circle(
        &mut self,
        x0: i32,
        y0: i32,
        r: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let mut walk = CircleWalk::new(r).peekable();
        while let Some((x, y)) = walk.next() {
            if walk.peek().is_some_and(|&(next_x, _)| next_x == x) {
                continue;
            }
            self.vline(x0 + x, y0 - y, y0 + y, color)?;
            if x != 0 {
                self.vline(x0 - x, y0 - y, y0 + y, color)?;
            }
        }
        Ok(())
    }
}

// Blanket implementation for all Surface types
impl<T: Surface> SurfaceExt for T {}

/// Midpoint circle walk over one quadrant
///
/// Yields `(x, y)` with `x` running from `-r` up to `0` and `y` from `0`
/// up to `r`; callers mirror each step into the other quadrants.
#[derive(Debug, Clone)]
pub struct CircleWalk {
    x: i32,
    y: i32,
    err: i32,
    done: bool,
}

impl CircleWalk {
    /// Start a walk for radius `r`
    pub fn new(r: i32) -> Self {
        let r = r.max(0);
        Self {
            x: -r,
            y: 0,
            err: 2 - 2 * r,
            done: false,
        }
    }
}

impl Iterator for CircleWalk {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);

        let mut e2 = self.err;
        if e2 <= self.y {
            self.y += 1;
            self.err += self.y * 2 + 1;
            if -self.x == self.y && e2 <= self.x {
                e2 = 0;
            }
        }
        if e2 > self.x {
            self.x += 1;
            self.err += self.x * 2 + 1;
        }
        self.done = self.x > 0;

        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, PixelLog};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn pixels(log: &PixelLog) -> BTreeSet<(i32, i32)> {
        log.pixels().map(|(x, y, _)| (x, y)).collect()
    }

    #[test]
    fn test_vertical_line_is_one_vline() {
        let mut log = PixelLog::new(240, 320);
        log.line(7, 30, 7, 10, Rgb565::GREEN).unwrap();
        assert_eq!(log.calls(), &[Call::VLine(7, 10, 30)]);
    }

    #[test]
    fn test_horizontal_line_is_one_hline() {
        let mut log = PixelLog::new(240, 320);
        log.line(50, 4, 20, 4, Rgb565::GREEN).unwrap();
        assert_eq!(log.calls(), &[Call::HLine(20, 50, 4)]);
    }

    #[test]
    fn test_diagonal_line_plots_every_step() {
        let mut log = PixelLog::new(240, 320);
        log.line(0, 0, 3, 3, Rgb565::RED).unwrap();
        let expected: BTreeSet<_> = [(0, 0), (1, 1), (2, 2), (3, 3)].into_iter().collect();
        assert_eq!(pixels(&log), expected);
        assert_eq!(log.calls().len(), 4);
    }

    #[test]
    fn test_shallow_line_tie_breaks_same_both_ways() {
        let mut forward = PixelLog::new(240, 320);
        forward.line(0, 0, 2, 1, Rgb565::RED).unwrap();
        let mut backward = PixelLog::new(240, 320);
        backward.line(2, 1, 0, 0, Rgb565::RED).unwrap();
        assert_eq!(pixels(&forward), pixels(&backward));
        assert_eq!(pixels(&forward).len(), 3);
    }

    #[test]
    fn test_rect_draws_four_edges() {
        let mut log = PixelLog::new(240, 320);
        log.rect(10, 20, 4, 8, Rgb565::WHITE).unwrap();
        assert_eq!(
            log.calls(),
            &[
                Call::HLine(4, 10, 20),
                Call::VLine(10, 8, 20),
                Call::HLine(4, 10, 8),
                Call::VLine(4, 8, 20),
            ]
        );
        // 7x13 border
        assert_eq!(pixels(&log).len(), 2 * 7 + 2 * 13 - 4);
    }

    #[test]
    fn test_zero_radius_circle_is_single_pixel() {
        let mut log = PixelLog::new(240, 320);
        log.circle(5, 5, 0, Rgb565::WHITE).unwrap();
        assert_eq!(pixels(&log).into_iter().collect::<std::vec::Vec<_>>(), [(5, 5)]);
    }

    #[test]
    fn test_fill_circle_fills_outline_interior() {
        let r = 10;
        let mut outline = PixelLog::new(240, 320);
        outline.circle(0, 0, r, Rgb565::WHITE).unwrap();
        let outline = pixels(&outline);

        let mut disc = PixelLog::new(240, 320);
        disc.fill_circle(0, 0, r, Rgb565::WHITE).unwrap();
        let disc = pixels(&disc);

        let expected: BTreeSet<_> = (-r..=r)
            .flat_map(|x| (-r..=r).map(move |y| (x, y)))
            .filter(|&(x, y)| {
                outline
                    .iter()
                    .any(|&(ox, oy)| ox == x && oy.abs() >= y.abs())
            })
            .collect();
        assert_eq!(disc, expected);
        assert!(disc.iter().all(|&(x, y)| x * x + y * y <= (r + 1) * (r + 1)));
    }

    #[test]
    fn test_fill_circle_writes_each_pixel_once() {
        for r in [0, 1, 2, 5, 10, 31] {
            let mut log = PixelLog::new(240, 320);
            log.fill_circle(100, 100, r, Rgb565::WHITE).unwrap();
            assert_eq!(log.pixels().count(), pixels(&log).len(), "r = {}", r);
            // One span per column
            assert_eq!(log.calls().len(), 2 * r as usize + 1, "r = {}", r);
        }
    }

    #[test]
    fn test_fill_circle_uses_spans_only() {
        let mut log = PixelLog::new(240, 320);
        log.fill_circle(50, 50, 6, Rgb565::WHITE).unwrap();
        assert!(log.calls().iter().all(|c| matches!(c, Call::VLine(..))));
    }

    proptest! {
        #[test]
        fn prop_line_is_symmetric(
            x0 in -20i32..260, y0 in -20i32..340, x1 in -20i32..260, y1 in -20i32..340
        ) {
            let mut forward = PixelLog::new(240, 320);
            forward.line(x0, y0, x1, y1, Rgb565::GREEN).unwrap();
            let mut backward = PixelLog::new(240, 320);
            backward.line(x1, y1, x0, y0, Rgb565::GREEN).unwrap();
            prop_assert_eq!(pixels(&forward), pixels(&backward));
        }

        #[test]
        fn prop_axis_aligned_line_matches_span(
            a in 0i32..240, b in 0i32..240, fixed in 0i32..240, vertical in any::<bool>()
        ) {
            let mut via_line = PixelLog::new(240, 320);
            let mut via_span = PixelLog::new(240, 320);
            if vertical {
                via_line.line(fixed, a, fixed, b, Rgb565::BLUE).unwrap();
                via_span.vline(fixed, a.min(b), a.max(b), Rgb565::BLUE).unwrap();
            } else {
                via_line.line(a, fixed, b, fixed, Rgb565::BLUE).unwrap();
                via_span.hline(a.min(b), a.max(b), fixed, Rgb565::BLUE).unwrap();
            }
            prop_assert_eq!(pixels(&via_line), pixels(&via_span));
        }

        #[test]
        fn prop_line_endpoints_are_plotted(
            x0 in 0i32..240, y0 in 0i32..320, x1 in 0i32..240, y1 in 0i32..320
        ) {
            let mut log = PixelLog::new(240, 320);
            log.line(x0, y0, x1, y1, Rgb565::GREEN).unwrap();
            let set = pixels(&log);
            let major = (x1 - x0).abs().max((y1 - y0).abs()) as usize;
            prop_assert!(set.contains(&(x0, y0)));
            prop_assert!(set.contains(&(x1, y1)));
            prop_assert_eq!(set.len(), major + 1);
        }

        #[test]
        fn prop_circle_is_symmetric(r in 0i32..60) {
            let mut log = PixelLog::new(240, 320);
            log.circle(0, 0, r, Rgb565::WHITE).unwrap();
            let set = pixels(&log);
            for &(x, y) in &set {
                prop_assert!(set.contains(&(-x, y)));
                prop_assert!(set.contains(&(x, -y)));
                prop_assert!(set.contains(&(y, x)));
            }
        }
    }
}
