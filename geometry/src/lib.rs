//! Integer, axis-aligned rectangle geometry.
//!
//! Rects cover the half-open region `[x, x + w) × [y, y + h)`. Operations
//! that can fail to produce a shape (no overlap, line fully outside) return
//! `None` rather than a zero sized rect.

#[cfg(test)]
#[macro_use]
extern crate parameterized;

mod clipping;
mod intersection;
mod point;
mod rect;
#[cfg(feature = "sdl2")]
mod sdl;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;

#[inline(always)]
pub const fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
    Rect::new(x, y, w, h)
}

#[inline(always)]
pub const fn point(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[inline(always)]
pub const fn size(w: i32, h: i32) -> Size {
    Size::new(w, h)
}

/// Narrows a widened edge computation back into the stored integer width.
/// Values outside the `i32` range saturate.
pub(crate) fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
