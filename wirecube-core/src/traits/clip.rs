//! Clipping helpers shared by `Surface` backends
//!
//! Primitives take signed coordinates so the rasterizers can step through
//! off-surface positions. Nothing outside `0..width` x `0..height` is ever
//! transmitted: points are dropped and spans are clamped.

use wirecube_protocol::AddressWindow;

/// Map a point onto the surface, or `None` if it lies outside
pub fn clip_point(x: i32, y: i32, width: u16, height: u16) -> Option<(u16, u16)> {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return None;
    }
    Some((x as u16, y as u16))
}

/// Clamp the inclusive span `a..=b` (either order) to `0..limit`
pub fn clip_span(a: i32, b: i32, limit: u16) -> Option<(u16, u16)> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi < 0 || lo >= limit as i32 || limit == 0 {
        return None;
    }
    let lo = lo.max(0) as u16;
    let hi = hi.min(limit as i32 - 1) as u16;
    Some((lo, hi))
}

/// Clip the rectangle with inclusive corners to the surface
pub fn clip_rect(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: u16,
    height: u16,
) -> Option<AddressWindow> {
    let (left, right) = clip_span(x0, x1, width)?;
    let (top, bottom) = clip_span(y0, y1, height)?;
    Some(AddressWindow::from_corners(left, top, right, bottom))
}

/// Intersect a window with the surface
pub fn clip_window(window: AddressWindow, width: u16, height: u16) -> Option<AddressWindow> {
    if window.is_empty() {
        return None;
    }
    clip_rect(
        window.x as i32,
        window.y as i32,
        window.x as i32 + window.w as i32 - 1,
        window.y as i32 + window.h as i32 - 1,
        width,
        height,
    )
}
